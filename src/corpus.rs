//! Discovery of lyric files under an input directory.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::constants::corpus::LYRICS_SUFFIX;
use crate::errors::QuantizeError;

/// Collect the lyric files directly under `input_dir`, sorted
/// lexicographically by filename.
///
/// Only regular files whose names end with `lyrics.txt` are returned. The
/// sort is an explicit step so downstream id assignment never depends on
/// filesystem enumeration order. A missing or unreadable directory fails
/// here, before any output is created.
pub fn discover_lyrics(input_dir: &Path) -> Result<Vec<PathBuf>, QuantizeError> {
    if !input_dir.is_dir() {
        return Err(QuantizeError::FileRead {
            path: input_dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "input directory not found"),
        });
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(input_dir).max_depth(1) {
        let entry = entry.map_err(|err| QuantizeError::FileRead {
            path: input_dir.to_path_buf(),
            source: err.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_lyrics = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(LYRICS_SUFFIX))
            .unwrap_or(false);
        if is_lyrics {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(input = %input_dir.display(), count = files.len(), "discovered lyric files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_only_lyrics_files_sorted_by_name() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("1973_b_lyrics.txt"), "x").unwrap();
        fs::write(temp.path().join("1960_a_lyrics.txt"), "x").unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        fs::write(temp.path().join("1960_readme.md"), "x").unwrap();

        let files = discover_lyrics(temp.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["1960_a_lyrics.txt", "1973_b_lyrics.txt"]);
    }

    #[test]
    fn skips_subdirectories() {
        let temp = tempdir().unwrap();
        let sub = temp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("1960_deep_lyrics.txt"), "x").unwrap();
        fs::write(temp.path().join("1960_top_lyrics.txt"), "x").unwrap();

        let files = discover_lyrics(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("1960_top_lyrics.txt"));
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("absent");
        let err = discover_lyrics(&missing).unwrap_err();
        assert!(matches!(err, QuantizeError::FileRead { .. }));
    }
}
