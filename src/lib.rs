#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Run configuration types.
pub mod config;
/// Centralized constants used across tokenizer, grouping, and writer.
pub mod constants;
/// Lyric file discovery.
pub mod corpus;
/// Partitioning of input files into vocabulary groups.
pub mod grouping;
/// End-to-end pipeline orchestration.
pub mod pipeline;
/// Line tokenization.
pub mod tokenizer;
/// Shared type aliases.
pub mod types;
/// Vocabulary construction and quantization.
pub mod vocab;
/// Output serialization.
pub mod writer;

mod errors;

pub use config::QuantizeConfig;
pub use errors::QuantizeError;
pub use grouping::Grouping;
pub use types::{GroupKey, Quantization, SongName, Token, TokenId};
pub use vocab::{IdAssignment, VocabBuilder, Vocabulary, map_and_quantize};
pub use writer::OutputWriter;
