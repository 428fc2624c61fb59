//! Word-level Markov chain text generation library.
//!
//! This crate provides a fixed-order Markov chain over words, including:
//! - Whitespace/newline tokenization with explicit paragraph markers
//! - Chain construction from any buffered text stream
//! - Lazy, frequency-weighted sampling driven by a caller-supplied random source
//! - A high-level `Generator` owning a seeded random source
//!
//! Low-level reading helpers are kept internal.

/// Markov chain model, prefix window, configuration and generator.
pub mod model;

/// Chunk tokenizer producing words and paragraph markers.
pub mod tokenizer;

/// Error type shared by ingestion and sampling.
mod error;

/// I/O utilities (chunked stream reading, file opening).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
