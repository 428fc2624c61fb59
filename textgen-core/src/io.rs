use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Byte separating two chunks of an input stream.
pub(crate) const CHUNK_DELIMITER: u8 = b' ';

/// Iterator over the space-delimited chunks of a buffered stream.
///
/// - Each chunk keeps its trailing delimiter (if any)
/// - The final chunk is yielded even when the stream does not end with a delimiter
/// - Invalid UTF-8 sequences are replaced with `U+FFFD`, never rejected
/// - Iteration stops after the first error
pub(crate) struct Chunks<R> {
	reader: R,
	buf: Vec<u8>,
	done: bool,
}

impl<R: BufRead> Chunks<R> {
	pub(crate) fn new(reader: R) -> Self {
		Self { reader, buf: Vec::new(), done: false }
	}
}

impl<R: BufRead> Iterator for Chunks<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		self.buf.clear();
		match self.reader.read_until(CHUNK_DELIMITER, &mut self.buf) {
			// End of stream
			Ok(0) => {
				self.done = true;
				None
			}
			Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
			Err(e) => {
				self.done = true;
				Some(Err(e))
			}
		}
	}
}

/// Opens a text file for buffered reading.
pub(crate) fn open_file<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}
