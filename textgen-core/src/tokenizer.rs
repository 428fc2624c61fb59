/// Separator marking a paragraph break inside a chunk.
pub const PARAGRAPH_SEPARATOR: &str = "\n";

/// Splits chunks of text into word tokens and standalone separator tokens.
///
/// Every occurrence of the separator becomes its own token, kept at its
/// position between the surrounding text. The text around separators is
/// trimmed of leading and trailing whitespace.
///
/// ## Notes
/// - Empty tokens (consecutive separators, blank edges) are passed through;
///   filtering them is the caller's job.
/// - An empty separator never matches: the whole trimmed chunk is one token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tokenizer {
	separator: String,
}

impl Tokenizer {
	/// Creates a tokenizer splitting on `separator`.
	pub fn new(separator: &str) -> Self {
		Self { separator: separator.to_owned() }
	}

	/// Returns the separator this tokenizer splits on.
	pub fn separator(&self) -> &str {
		&self.separator
	}

	/// Tokenizes a chunk.
	///
	/// Example with the default separator:
	/// `"end\n\nstart "` → `["end", "\n", "", "\n", "start"]`
	pub fn tokenize<'a>(&'a self, chunk: &'a str) -> Vec<&'a str> {
		let mut tokens = Vec::new();
		let separator = self.separator.as_str();

		let mut rest = chunk;
		if !separator.is_empty() {
			while let Some(index) = rest.find(separator) {
				tokens.push(rest[..index].trim());
				tokens.push(separator);
				rest = &rest[index + separator.len()..];
			}
		}
		tokens.push(rest.trim());

		tokens
	}
}

impl Default for Tokenizer {
	fn default() -> Self {
		Self::new(PARAGRAPH_SEPARATOR)
	}
}
