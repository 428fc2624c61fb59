use std::collections::HashMap;
use std::io::{BufRead, Write};

use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::prefix::Prefix;
use crate::Result;
use crate::io::Chunks;
use crate::tokenizer::Tokenizer;

/// Fixed-order Markov chain over words.
///
/// The `ChainModel` maps the key of a prefix (the last `n` words, joined by
/// a space) to every word observed right after it. Duplicates are kept: the
/// multiplicity of a word in a list is its weight when sampling.
///
/// # Responsibilities
/// - Build the table from text streams (`ingest`)
/// - Produce frequency-weighted word sequences (`words`, `sample`)
///
/// # Invariants
/// - Every stored candidate list is non-empty
/// - An empty-string candidate marks a paragraph break
/// - Sampling never mutates the table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainModel {
	/// Number of words used as context (the chain order)
	prefix_len: usize,

	/// Mapping from a prefix key to its observed successors
	chains: HashMap<String, Vec<String>>,

	/// Splits chunks into words and paragraph separators
	tokenizer: Tokenizer,
}

impl ChainModel {
	/// Creates an empty chain of order `prefix_len`.
	pub fn new(prefix_len: usize) -> Self {
		Self::with_tokenizer(prefix_len, Tokenizer::default())
	}

	/// Creates an empty chain of order `prefix_len` splitting paragraphs
	/// with a custom tokenizer.
	///
	/// Every separator token is recorded as the empty string, like a newline
	/// with the default tokenizer.
	pub fn with_tokenizer(prefix_len: usize, tokenizer: Tokenizer) -> Self {
		Self { prefix_len, chains: HashMap::new(), tokenizer }
	}

	/// Returns the chain order.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Number of distinct prefix keys.
	pub fn len(&self) -> usize {
		self.chains.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}

	/// Iterates over every recorded prefix key, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.chains.keys().map(String::as_str)
	}

	/// Returns the successors recorded for `key`, duplicates included.
	///
	/// Returns `None` if the key is a dead end.
	pub fn candidates(&self, key: &str) -> Option<&[String]> {
		self.chains.get(key).map(Vec::as_slice)
	}

	/// Learns word transitions from a text stream.
	///
	/// The stream is read in space-delimited chunks, each chunk tokenized on
	/// newlines. For every non-empty token:
	/// - a newline is recorded as the empty string (paragraph marker)
	/// - the token is appended to the list of the current prefix key
	/// - the prefix slides forward by the token
	///
	/// The prefix starts empty on every call: successive calls add to the same
	/// table but do not continue each other's chains.
	///
	/// Returns the number of observations recorded.
	///
	/// # Errors
	/// Returns an error if reading fails.
	/// Observations recorded before the failure are kept.
	/// Invalid UTF-8 is not an error: it is decoded lossily.
	pub fn ingest<R: BufRead>(&mut self, reader: R) -> Result<usize> {
		let mut prefix = Prefix::new(self.prefix_len);
		let mut observations = 0;

		for chunk in Chunks::new(reader) {
			let chunk = chunk?;
			for token in self.tokenizer.tokenize(&chunk) {
				if token.is_empty() {
					continue;
				}
				let word = if token == self.tokenizer.separator() { "" } else { token };

				self.chains.entry(prefix.key()).or_default().push(word.to_owned());
				prefix.push_back(word);
				observations += 1;
			}
		}

		debug!("Ingested {} observations, {} prefixes in table", observations, self.chains.len());
		Ok(observations)
	}

	/// Returns a lazy sequence of at most `max_len` generated words.
	///
	/// Generation starts from the empty prefix and stops early at the first
	/// dead end. Each word is drawn uniformly from the candidate list of the
	/// current key, so a word seen `k` times out of `len` has probability
	/// `k / len`.
	pub fn words<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R, max_len: usize) -> Words<'a, R> {
		Words { model: self, rng, prefix: Prefix::new(self.prefix_len), remaining: max_len }
	}

	/// Writes at most `max_len` generated words to `sink`, each followed by a space.
	///
	/// Words are written as they are drawn, then the sink is flushed.
	/// Paragraph markers are written like any other word.
	///
	/// Returns the number of words written.
	///
	/// # Errors
	/// Returns the first write or flush failure; generation stops there.
	pub fn sample<W: Write, R: Rng + ?Sized>(&self, mut sink: W, rng: &mut R, max_len: usize) -> Result<usize> {
		let mut written = 0;
		for word in self.words(rng, max_len) {
			sink.write_all(word.as_bytes())?;
			sink.write_all(b" ")?;
			written += 1;
		}
		sink.flush()?;
		Ok(written)
	}
}

/// Lazy word sequence produced by [`ChainModel::words`].
///
/// Not resumable: a new sequence always starts over from the empty prefix.
pub struct Words<'a, R: ?Sized> {
	model: &'a ChainModel,
	rng: &'a mut R,
	prefix: Prefix,
	remaining: usize,
}

impl<R: ?Sized> Words<'_, R> {
	/// Returns the key that the next draw will look up.
	pub fn key(&self) -> String {
		self.prefix.key()
	}
}

impl<'a, R: Rng + ?Sized> Iterator for Words<'a, R> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		if self.remaining == 0 {
			return None;
		}

		let model: &'a ChainModel = self.model;
		let key = self.prefix.key();
		let Some(candidates) = model.chains.get(&key) else {
			trace!("Dead end at prefix {:?}", key);
			self.remaining = 0;
			return None;
		};

		let word = candidates.choose(&mut *self.rng)?;
		self.remaining -= 1;
		self.prefix.push_back(word);
		Some(word.as_str())
	}
}
