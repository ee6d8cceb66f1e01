//! Corpus Assembly and Feature Table Building
//!
//! Turns a directory of spectrum files into the long-format dataset and the
//! per-test feature table, and writes both out as CSV.

mod assembler;
mod builder;
mod error;
mod export;
mod index;

pub use assembler::{assemble, LongFormDataset, LongRecord};
pub use builder::{build_feature_table, FeatureRow, FeatureTable};
pub use error::CorpusError;
pub use export::{write_feature_table_csv, write_long_form_csv};
pub use index::{index_directory, CorpusEntry};
