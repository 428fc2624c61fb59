use std::fmt;

/// Sliding window over the last `n` words seen.
///
/// A `Prefix` is the context of a Markov chain of order `n`: its string form
/// (words joined by a single space) is the key used to look up candidate next
/// words.
///
/// ## Invariants
/// - The number of slots is fixed at creation
/// - A fresh prefix holds `n` empty strings, the "start of document" state
///
/// The window is never used as a key itself: `key()` returns an owned snapshot,
/// so sliding the window afterwards cannot alter a key already handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
	words: Vec<String>,
}

impl Prefix {
	/// Creates a prefix of `len` empty slots.
	pub fn new(len: usize) -> Self {
		Self { words: vec![String::new(); len] }
	}

	/// Number of slots (the chain order).
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Slides the window by one word.
	///
	/// - The oldest word is dropped from the front and returned
	/// - `word` becomes the most recent slot
	/// - A zero-length prefix ignores the word and returns `None`
	pub fn push_back(&mut self, word: &str) -> Option<String> {
		let last = self.words.len().checked_sub(1)?;
		self.words.rotate_left(1);
		Some(std::mem::replace(&mut self.words[last], word.to_owned()))
	}

	/// Returns the lookup key for the current window.
	pub fn key(&self) -> String {
		self.words.join(" ")
	}
}

impl fmt::Display for Prefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.key())
	}
}
