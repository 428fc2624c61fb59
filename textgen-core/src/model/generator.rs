use std::io::{BufRead, Write};
use std::path::Path;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::chain::ChainModel;
use super::config::GeneratorConfig;
use crate::{Result, io};

/// High-level text generator.
///
/// # Responsibilities
/// - Own a `ChainModel` of the configured order
/// - Own the random source, seeded once at construction
/// - Feed input sources into the model, one after another
/// - Generate bounded text into any writer
///
/// With `GeneratorConfig::seed` set, two generators fed the same inputs
/// produce the same output.
#[derive(Debug)]
pub struct Generator {
	model: ChainModel,
	rng: StdRng,
	max_len: usize,
}

impl Generator {
	/// Creates an empty generator from a configuration.
	///
	/// The random source is seeded from `config.seed` if set, otherwise from
	/// the operating system's entropy source.
	pub fn new(config: &GeneratorConfig) -> Self {
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self { model: ChainModel::new(config.prefix_len), rng, max_len: config.max_len }
	}

	/// Read access to the underlying chain.
	pub fn model(&self) -> &ChainModel {
		&self.model
	}

	/// Maximum number of words produced by `generate`.
	pub fn max_len(&self) -> usize {
		self.max_len
	}

	pub fn set_max_len(&mut self, max_len: usize) {
		self.max_len = max_len;
	}

	/// Learns transitions from a buffered stream.
	///
	/// See [`ChainModel::ingest`].
	pub fn load<R: BufRead>(&mut self, reader: R) -> Result<usize> {
		self.model.ingest(reader)
	}

	/// Learns transitions from a text file.
	///
	/// # Errors
	/// Returns an error if the file cannot be opened or read.
	pub fn load_file<P: AsRef<Path>>(&mut self, filepath: P) -> Result<usize> {
		let path = filepath.as_ref();
		debug!("Loading {}", path.display());
		let reader = io::open_file(path)?;
		self.load(reader)
	}

	/// Writes at most `max_len` generated words to `sink`.
	///
	/// See [`ChainModel::sample`].
	pub fn generate<W: Write>(&mut self, sink: W) -> Result<usize> {
		self.model.sample(sink, &mut self.rng, self.max_len)
	}
}
