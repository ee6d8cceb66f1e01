//! EIS Measurement Conventions
//!
//! Defines the filename-encoded test identity and the typed spectrum model
//! shared by every pipeline stage.

mod error;
mod filename;
mod identity;
mod spectrum;

pub use error::FormatError;
pub use filename::{decode_filename, SPECTRUM_EXTENSIONS};
pub use identity::{GroupKey, TestIdentity};
pub use spectrum::{Spectrum, SpectrumPoint};
