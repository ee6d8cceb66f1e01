//! Feature Engine Errors

use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// The spectrum reached the extractor with zero points
    ///
    /// The loader's non-empty postcondition should make this unreachable in
    /// the assembled pipeline; hitting it means an internal invariant broke.
    #[error("cannot derive features from an empty spectrum")]
    EmptySpectrum,
}
