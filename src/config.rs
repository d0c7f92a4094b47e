use std::path::PathBuf;

use crate::grouping::Grouping;
use crate::vocab::IdAssignment;

/// Top-level run configuration.
#[derive(Clone, Debug)]
pub struct QuantizeConfig {
    /// Directory containing the `*lyrics.txt` input files.
    pub input_dir: PathBuf,
    /// Directory receiving one quantization file per song (created if absent).
    pub output_dir: PathBuf,
    /// Path of the aggregate file with one record per song.
    pub output_file: PathBuf,
    /// Which files share one vocabulary.
    pub grouping: Grouping,
    /// How the id counter advances during vocabulary construction.
    pub id_assignment: IdAssignment,
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("quantizations"),
            output_file: PathBuf::from("quantizations.txt"),
            grouping: Grouping::default(),
            id_assignment: IdAssignment::default(),
        }
    }
}
