use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use lyriq::{Grouping, IdAssignment, QuantizeConfig, pipeline};

#[derive(Debug, Parser)]
#[command(
    name = "lyriq",
    disable_help_subcommand = true,
    about = "Quantize lyric files into integer sequences",
    long_about = "Assign integer ids to words across a lyric corpus and rewrite every song \
as its id sequence, one file per song plus one aggregate file."
)]
struct Cli {
    #[arg(long, value_name = "DIR", help = "Directory containing *lyrics.txt files")]
    input: PathBuf,
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "quantizations",
        help = "Directory receiving one quantization file per song"
    )]
    output_dir: PathBuf,
    #[arg(
        long = "output-file",
        value_name = "PATH",
        default_value = "quantizations.txt",
        help = "Aggregate file with one record per song"
    )]
    output_file: PathBuf,
    #[arg(
        long,
        help = "Build one vocabulary per decade instead of one global vocabulary"
    )]
    decades: bool,
    #[arg(
        long = "dense-ids",
        help = "Assign contiguous ids per distinct token instead of the per-occurrence counter"
    )]
    dense_ids: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    let config = QuantizeConfig {
        input_dir: cli.input,
        output_dir: cli.output_dir,
        output_file: cli.output_file,
        grouping: if cli.decades {
            Grouping::ByDecade
        } else {
            Grouping::Global
        },
        id_assignment: if cli.dense_ids {
            IdAssignment::Dense
        } else {
            IdAssignment::PerOccurrence
        },
    };

    pipeline::run(&config)?;
    Ok(())
}
