use std::path::PathBuf;

use clap::Parser;

/// Decide whether the final assertion of a formula file follows from the preceding premises,
/// by resolution refutation.
#[derive(Parser)]
#[command(name = "heron_cli", version)]
pub(crate) struct Args {
    /// The formula file: one formula per non-blank line, the last line the query.
    pub file: PathBuf,

    /// The directory the report files are written to.
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// The upper bound on resolvents admitted during the proof attempt.
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Echo the derivation trace to stdout.
    #[arg(long)]
    pub trace: bool,
}
