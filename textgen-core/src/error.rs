/// Errors surfaced by ingestion and sampling.
///
/// Only I/O failures exist: every text, prefix length and output length is
/// structurally valid. A clean end of stream is never reported as an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
