//! Serialization of quantizations into the two output shapes.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::constants::writer::RECORD_TERMINATOR;
use crate::errors::QuantizeError;
use crate::types::{Quantization, SongName, TokenId};

/// Writes per-song files and the aggregate file for a finished run.
///
/// Songs are written in the iteration order of the map handed in, which the
/// pipeline arranges as group order then filename order within each group.
pub struct OutputWriter {
    output_dir: PathBuf,
    output_file: PathBuf,
}

impl OutputWriter {
    /// Create a writer targeting `output_dir` for per-song files and
    /// `output_file` for the aggregate.
    pub fn new(output_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_file: output_file.into(),
        }
    }

    /// Produce both output shapes. The output directory is created if
    /// absent; existing files are overwritten.
    pub fn write_all(
        &self,
        songs: &IndexMap<SongName, Quantization>,
    ) -> Result<(), QuantizeError> {
        self.write_per_song(songs)?;
        self.write_aggregate(songs)?;
        Ok(())
    }

    /// One file per song, named after the source file: space-separated ids
    /// with a trailing space and no newline.
    fn write_per_song(&self, songs: &IndexMap<SongName, Quantization>) -> Result<(), QuantizeError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| QuantizeError::FileWrite {
            path: self.output_dir.clone(),
            source,
        })?;
        for (name, quantization) in songs {
            let path = self.output_dir.join(name);
            fs::write(&path, render_record(quantization)).map_err(|source| {
                QuantizeError::FileWrite { path, source }
            })?;
        }
        debug!(dir = %self.output_dir.display(), songs = songs.len(), "wrote per-song files");
        Ok(())
    }

    /// One aggregate file with one record per song. Every record, the last
    /// included, is followed by the literal `"\n "` terminator.
    fn write_aggregate(
        &self,
        songs: &IndexMap<SongName, Quantization>,
    ) -> Result<(), QuantizeError> {
        let file = File::create(&self.output_file).map_err(|source| QuantizeError::FileWrite {
            path: self.output_file.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let mut emit = || -> std::io::Result<()> {
            for quantization in songs.values() {
                writer.write_all(render_record(quantization).as_bytes())?;
                writer.write_all(RECORD_TERMINATOR.as_bytes())?;
            }
            writer.flush()
        };
        emit().map_err(|source| QuantizeError::FileWrite {
            path: self.output_file.clone(),
            source,
        })?;
        debug!(file = %self.output_file.display(), songs = songs.len(), "wrote aggregate file");
        Ok(())
    }
}

/// Render one quantization as `"0 1 2 "`: every id followed by a space.
fn render_record(quantization: &[TokenId]) -> String {
    let mut record = String::new();
    for id in quantization {
        record.push_str(&id.to_string());
        record.push(' ');
    }
    record
}
