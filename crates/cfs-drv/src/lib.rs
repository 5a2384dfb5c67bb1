//! cfs-drv — CLI driver for the Closed-Form Script compiler.
//!
//! Orchestrates the pipeline (`cfs-par` → `cfs-resolve` → `cfs-lower`)
//! around the file I/O and process-exit-code concerns that sit outside
//! the core compiler crates' scope.

pub mod cli;

use std::fs;
use std::path::Path;

use cfs_util::{CfsError, Source};
use tracing::{debug, info};

pub use cli::Cli;

/// Runs the full pipeline on `input`, returning the single-line output
/// string with no surrounding whitespace; the caller terminates it with
/// one trailing newline.
pub fn compile(input: &Path) -> Result<String, CfsError> {
    let raw = fs::read_to_string(input)
        .map_err(|e| CfsError::usage(format!("cannot read '{}': {e}", input.display())))?;
    debug!(bytes = raw.len(), "read source file");

    let source = Source::new(&raw);
    let resolved = cfs_resolve::resolve(source.text())?;
    debug!("resolved program to a single expression");

    let output = cfs_lower::lower_and_emit(&resolved)?;
    info!(len = output.len(), "lowered to closed-form expression");

    Ok(output)
}

/// Runs [`compile`] and writes the result to `output`, or to standard
/// output when `output` is `None`.
pub fn run(input: &Path, output: Option<&Path>) -> Result<(), CfsError> {
    let expression = compile(input)?;
    match output {
        Some(path) => {
            fs::write(path, format!("{expression}\n"))
                .map_err(|e| CfsError::usage(format!("cannot write '{}': {e}", path.display())))?;
            debug!(path = %path.display(), "wrote output file");
        }
        None => {
            println!("{expression}");
        }
    }
    Ok(())
}

/// Initializes the `tracing` subscriber the way `main` wants it: `debug`
/// level under `--verbose`/`CFS_VERBOSE`, `info` otherwise.
pub fn init_logging(verbose: bool, no_color: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn compile_str(src: &str) -> Result<String, CfsError> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(src.as_bytes()).unwrap();
        compile(file.path())
    }

    #[test]
    fn compiles_simple_program() {
        assert_eq!(compile_str("main() return 1 + 2 * 3").unwrap(), "1 + 2 * 3");
    }

    #[test]
    fn missing_main_surfaces_as_program_error() {
        assert!(matches!(compile_str("f() return 1"), Err(CfsError::Program { .. })));
    }

    #[test]
    fn missing_file_surfaces_as_usage_error() {
        let err = compile(Path::new("/no/such/file.cfs")).unwrap_err();
        assert!(matches!(err, CfsError::Usage { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
