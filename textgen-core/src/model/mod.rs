//! Top-level module for the word-level Markov chain.
//!
//! This module provides:
//! - The chain table and its ingestion/sampling logic (`ChainModel`)
//! - The sliding-window prefix used to build lookup keys (`Prefix`)
//! - Generation settings (`GeneratorConfig`)
//! - A high-level interface owning a seeded random source (`Generator`)

/// Fixed-order word chain: ingestion, lookup and lazy sampling.
pub mod chain;

/// Generation settings (chain order, output length, seed).
pub mod config;

/// High-level interface combining a `ChainModel` with its random source.
pub mod generator;

/// Sliding window of the most recent words.
///
/// Produces the string keys of the chain table.
pub mod prefix;
