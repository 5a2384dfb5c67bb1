//! Command-line surface.
//!
//! A `clap` derive struct with global flags backed by environment
//! variables.

use std::path::PathBuf;

use clap::Parser;

/// Compiles a Closed-Form Script program into a single closed-form
/// arithmetic expression consumable by the Facer host engine.
#[derive(Parser, Debug)]
#[command(name = "cfs")]
#[command(author = "CFS Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiles Closed-Form Script to a single arithmetic expression")]
pub struct Cli {
    /// Path to the `.cfs` source file.
    pub input: PathBuf,

    /// Output path. Writes to standard output when omitted.
    pub output: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "CFS_VERBOSE")]
    pub verbose: bool,

    /// Disable ANSI color in logging output.
    #[arg(long, global = true, env = "CFS_NO_COLOR")]
    pub no_color: bool,
}
