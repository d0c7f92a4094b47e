//! Partitioning of the input file set into vocabulary groups.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::constants::grouping::{DECADE_PREFIX_LEN, DECADE_SUFFIX, GLOBAL_KEY};
use crate::errors::QuantizeError;
use crate::types::GroupKey;

/// Strategy deciding which files share one vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grouping {
    /// All input files form a single group.
    #[default]
    Global,
    /// One group per decade, keyed by the filename's leading year digits.
    ByDecade,
}

/// Derive the decade key for a lyric filename: the first three characters
/// plus the literal `0s` suffix (`1973_love_lyrics.txt` -> `1970s`).
///
/// The prefix must be three ASCII digits. Filenames that are shorter or do
/// not follow the `YYYY_` convention are rejected rather than silently
/// truncated.
pub fn decade_key(song_name: &str) -> Result<GroupKey, QuantizeError> {
    let prefix = song_name.get(..DECADE_PREFIX_LEN).ok_or_else(|| {
        QuantizeError::Configuration(format!(
            "filename '{song_name}' is too short for decade extraction"
        ))
    })?;
    if !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(QuantizeError::Configuration(format!(
            "filename '{song_name}' does not start with year digits"
        )));
    }
    Ok(format!("{prefix}{DECADE_SUFFIX}"))
}

/// Partition `files` according to `grouping`.
///
/// `files` must already be in lexicographic filename order; buckets appear
/// in the order their key is first seen during that scan, and files keep
/// their relative order inside each bucket.
pub fn partition(
    files: Vec<PathBuf>,
    grouping: Grouping,
) -> Result<IndexMap<GroupKey, Vec<PathBuf>>, QuantizeError> {
    let mut groups: IndexMap<GroupKey, Vec<PathBuf>> = IndexMap::new();
    match grouping {
        Grouping::Global => {
            groups.insert(GLOBAL_KEY.to_owned(), files);
        }
        Grouping::ByDecade => {
            for path in files {
                let name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| {
                        QuantizeError::Configuration(format!(
                            "path '{}' has no valid filename",
                            path.display()
                        ))
                    })?;
                let key = decade_key(name)?;
                groups.entry(key).or_default().push(path);
            }
        }
    }
    Ok(groups)
}
