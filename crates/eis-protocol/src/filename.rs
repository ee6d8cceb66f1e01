//! Filename Decoding
//!
//! Spectrum files encode their test condition in the name:
//! `Cell02_95SOH_15degC_05SOC_9505.xls`. The first four tokens carry literal
//! tags (`Cell` as prefix, `SOH`/`degC`/`SOC` as suffixes); the last token is
//! the bare capacity code.

use crate::error::FormatError;
use crate::identity::TestIdentity;
use std::path::Path;
use std::str::FromStr;

/// File extensions recognized as spectrum sources.
///
/// The reference dataset ships `.xls` files that are tab-separated text, so
/// `.xls` is treated as a delimited-text extension here, not a spreadsheet.
pub const SPECTRUM_EXTENSIONS: [&str; 4] = ["xls", "csv", "tsv", "txt"];

/// Decode a spectrum path (or bare file name) into its [`TestIdentity`].
///
/// Rejects anything that is not exactly five underscore-separated tokens
/// with integer payloads; no partial result is ever produced.
pub fn decode_filename(path: &Path) -> Result<TestIdentity, FormatError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| FormatError::MissingStem {
            name: path.display().to_string(),
        })?;

    let tokens: Vec<&str> = stem.split('_').collect();
    if tokens.len() != 5 {
        return Err(FormatError::TokenCount {
            name: stem.to_string(),
            found: tokens.len(),
        });
    }

    Ok(TestIdentity {
        cell_id: parse_token(stem, tokens[0], tokens[0].strip_prefix("Cell"))?,
        soh_pct: parse_token(stem, tokens[1], tokens[1].strip_suffix("SOH"))?,
        temp_c: parse_token(stem, tokens[2], tokens[2].strip_suffix("degC"))?,
        soc_pct: parse_token(stem, tokens[3], tokens[3].strip_suffix("SOC"))?,
        capacity_code: parse_token(stem, tokens[4], Some(tokens[4]))?,
    })
}

/// Parse the tag-stripped remainder of one token as an integer.
///
/// A missing tag is tolerated when the bare token is still numeric, matching
/// the source pipeline's strip-by-substitution behavior.
fn parse_token<T: FromStr>(
    stem: &str,
    token: &str,
    stripped: Option<&str>,
) -> Result<T, FormatError> {
    stripped
        .unwrap_or(token)
        .parse()
        .map_err(|_| FormatError::InvalidToken {
            name: stem.to_string(),
            token: token.to_string(),
        })
}
