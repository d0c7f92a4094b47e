//! First-come-first-served vocabulary construction and quantization.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::QuantizeError;
use crate::tokenizer::tokenize;
use crate::types::{Quantization, SongName, Token, TokenId};

/// Mapping from token to its id, in first-occurrence order.
pub type Vocabulary = IndexMap<Token, TokenId>;

/// Controls how the id counter advances while building a vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdAssignment {
    /// Advance the counter on every token occurrence, so ids assigned to new
    /// tokens have gaps wherever repeats came first. This matches the
    /// historical output format and is the default.
    #[default]
    PerOccurrence,
    /// Advance the counter only when a new token is inserted, yielding
    /// contiguous ids `0..N-1` over the N distinct tokens.
    Dense,
}

/// Per-group vocabulary state: the token map plus the id counter.
///
/// One builder is constructed per group and discarded once the group's
/// quantizations are produced; vocabularies are never persisted or shared
/// across groups.
#[derive(Debug)]
pub struct VocabBuilder {
    assignment: IdAssignment,
    ids: Vocabulary,
    counter: TokenId,
}

impl VocabBuilder {
    /// Create an empty builder with the given id-assignment policy.
    pub fn new(assignment: IdAssignment) -> Self {
        Self {
            assignment,
            ids: Vocabulary::new(),
            counter: 0,
        }
    }

    /// Record one token occurrence and return its id.
    ///
    /// A token absent from the vocabulary is inserted with the current
    /// counter value; an id never changes once assigned. The counter scope
    /// is the whole group, not reset between files.
    pub fn observe(&mut self, token: &str) -> TokenId {
        let (id, inserted) = match self.ids.get(token) {
            Some(&id) => (id, false),
            None => {
                let id = self.counter;
                self.ids.insert(token.to_owned(), id);
                (id, true)
            }
        };
        if inserted || self.assignment == IdAssignment::PerOccurrence {
            self.counter += 1;
        }
        id
    }

    /// Quantize one file's token stream, line by line in reading order.
    pub fn quantize_file(&mut self, path: &Path) -> Result<Quantization, QuantizeError> {
        let file = File::open(path).map_err(|source| QuantizeError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut quantization = Quantization::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| QuantizeError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            for token in tokenize(&line) {
                quantization.push(self.observe(token));
            }
        }
        Ok(quantization)
    }

    /// Consume the builder, returning the finished vocabulary.
    pub fn into_vocabulary(self) -> Vocabulary {
        self.ids
    }
}

/// Build one vocabulary over `files` and quantize each file against it.
///
/// Files are processed in increasing filename order regardless of the order
/// given; the sort is explicit so results never depend on filesystem
/// enumeration order. Fails on the first unreadable or undecodable file; a
/// group's quantization is only well-defined when every file is readable.
pub fn map_and_quantize(
    files: &[PathBuf],
    assignment: IdAssignment,
) -> Result<(Vocabulary, IndexMap<SongName, Quantization>), QuantizeError> {
    let mut ordered: Vec<&PathBuf> = files.iter().collect();
    ordered.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut builder = VocabBuilder::new(assignment);
    let mut quantizations = IndexMap::new();
    for path in ordered {
        let name = song_name(path)?;
        let quantization = builder.quantize_file(path)?;
        debug!(song = %name, tokens = quantization.len(), "quantized song");
        quantizations.insert(name, quantization);
    }
    Ok((builder.into_vocabulary(), quantizations))
}

fn song_name(path: &Path) -> Result<SongName, QuantizeError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_owned())
        .ok_or_else(|| {
            QuantizeError::Configuration(format!(
                "path '{}' has no valid filename",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_songs(dir: &Path, songs: &[(&str, &str)]) -> Vec<PathBuf> {
        songs
            .iter()
            .map(|(name, text)| {
                let path = dir.join(name);
                fs::write(&path, text).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn counter_advances_per_occurrence() {
        let temp = tempdir().unwrap();
        let files = write_songs(
            temp.path(),
            &[
                ("1960_songA_lyrics.txt", "hello world"),
                ("1960_songB_lyrics.txt", "hello there"),
            ],
        );

        let (vocabulary, quantizations) =
            map_and_quantize(&files, IdAssignment::PerOccurrence).unwrap();

        assert_eq!(quantizations["1960_songA_lyrics.txt"], vec![0, 1]);
        // "hello" repeats before "there" is first seen, so "there" lands on
        // the occurrence count (3), not the distinct count (2).
        assert_eq!(quantizations["1960_songB_lyrics.txt"], vec![0, 3]);
        assert_eq!(vocabulary["hello"], 0);
        assert_eq!(vocabulary["world"], 1);
        assert_eq!(vocabulary["there"], 3);
    }

    #[test]
    fn dense_assignment_yields_contiguous_ids() {
        let temp = tempdir().unwrap();
        let files = write_songs(
            temp.path(),
            &[
                ("1960_songA_lyrics.txt", "hello world"),
                ("1960_songB_lyrics.txt", "hello there"),
            ],
        );

        let (vocabulary, quantizations) = map_and_quantize(&files, IdAssignment::Dense).unwrap();

        assert_eq!(quantizations["1960_songA_lyrics.txt"], vec![0, 1]);
        assert_eq!(quantizations["1960_songB_lyrics.txt"], vec![0, 2]);
        let mut ids: Vec<TokenId> = vocabulary.values().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn quantization_length_matches_token_count() {
        let temp = tempdir().unwrap();
        let files = write_songs(
            temp.path(),
            &[("1970_song_lyrics.txt", "la la la ---\nla (la)")],
        );

        let (_, quantizations) = map_and_quantize(&files, IdAssignment::PerOccurrence).unwrap();
        // Six pieces including the punctuation-only one that strips to "".
        assert_eq!(quantizations["1970_song_lyrics.txt"].len(), 6);
    }

    #[test]
    fn empty_tokens_share_one_vocabulary_entry() {
        let temp = tempdir().unwrap();
        let files = write_songs(temp.path(), &[("1970_song_lyrics.txt", "--- ... !!!")]);

        let (vocabulary, quantizations) =
            map_and_quantize(&files, IdAssignment::PerOccurrence).unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary[""], 0);
        assert_eq!(quantizations["1970_song_lyrics.txt"], vec![0, 0, 0]);
    }

    #[test]
    fn files_are_processed_in_filename_order() {
        let temp = tempdir().unwrap();
        // Deliberately pass files out of order.
        let mut files = write_songs(
            temp.path(),
            &[
                ("1960_b_lyrics.txt", "beta"),
                ("1960_a_lyrics.txt", "alpha"),
            ],
        );
        files.reverse();

        let (vocabulary, quantizations) =
            map_and_quantize(&files, IdAssignment::PerOccurrence).unwrap();
        assert_eq!(vocabulary["alpha"], 0);
        assert_eq!(vocabulary["beta"], 1);
        let names: Vec<&SongName> = quantizations.keys().collect();
        assert_eq!(names, vec!["1960_a_lyrics.txt", "1960_b_lyrics.txt"]);
    }

    #[test]
    fn missing_file_fails_the_whole_group() {
        let temp = tempdir().unwrap();
        let mut files = write_songs(temp.path(), &[("1960_a_lyrics.txt", "alpha")]);
        files.push(temp.path().join("1960_z_lyrics.txt"));

        let err = map_and_quantize(&files, IdAssignment::PerOccurrence).unwrap_err();
        assert!(matches!(err, QuantizeError::FileRead { .. }));
    }

    #[test]
    fn undecodable_file_is_a_read_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("1960_bad_lyrics.txt");
        fs::write(&path, [0xff, 0xfe, 0x80]).unwrap();

        let err = map_and_quantize(&[path], IdAssignment::PerOccurrence).unwrap_err();
        assert!(matches!(err, QuantizeError::FileRead { .. }));
    }
}
