use serde::{Deserialize, Serialize};

/// Default chain order.
pub const DEFAULT_PREFIX_LEN: usize = 2;

/// Default maximum number of generated words.
pub const DEFAULT_MAX_LEN: usize = 32;

/// Settings for a `Generator`.
///
/// Every combination of values is valid:
/// - `prefix_len`: chain order, the number of preceding words used as context
///   (0 makes every word independent of its predecessors)
/// - `max_len`: upper bound on the number of words produced per generation
/// - `seed`: fixed seed for reproducible output; `None` seeds from OS entropy
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
	pub prefix_len: usize,
	pub max_len: usize,
	pub seed: Option<u64>,
}

impl GeneratorConfig {
	/// Returns a copy of this configuration using a fixed seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self { prefix_len: DEFAULT_PREFIX_LEN, max_len: DEFAULT_MAX_LEN, seed: None }
	}
}
