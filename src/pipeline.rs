//! End-to-end orchestration: discover, group, quantize, write.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::config::QuantizeConfig;
use crate::errors::QuantizeError;
use crate::types::{Quantization, SongName};
use crate::writer::OutputWriter;
use crate::{corpus, grouping, vocab};

/// Run the full pipeline for `config`.
///
/// Groups are processed one at a time, single-threaded; each group's
/// vocabulary is built, used, and dropped before the next group starts.
/// Songs reach the writer in group order, filename order within a group.
pub fn run(config: &QuantizeConfig) -> Result<(), QuantizeError> {
    let files = corpus::discover_lyrics(&config.input_dir)?;
    let groups = grouping::partition(files, config.grouping)?;

    let mut songs: IndexMap<SongName, Quantization> = IndexMap::new();
    for (key, group_files) in &groups {
        let (vocabulary, quantizations) =
            vocab::map_and_quantize(group_files, config.id_assignment)?;
        debug!(
            group = %key,
            files = group_files.len(),
            distinct_tokens = vocabulary.len(),
            "quantized group"
        );
        songs.extend(quantizations);
    }

    OutputWriter::new(&config.output_dir, &config.output_file).write_all(&songs)?;
    info!(
        songs = songs.len(),
        groups = groups.len(),
        output_dir = %config.output_dir.display(),
        output_file = %config.output_file.display(),
        "quantization complete"
    );
    Ok(())
}
