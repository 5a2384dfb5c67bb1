//! Entry point: parse arguments, run the compiler, map the result onto
//! process exit codes (`0` success, `1` compile error, `2` usage error).

use clap::Parser;

use cfs_drv::cli::Cli;
use cfs_util::diagnostic;

fn main() {
    let cli = Cli::parse();
    cfs_drv::init_logging(cli.verbose, cli.no_color);

    match cfs_drv::run(&cli.input, cli.output.as_deref()) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{}", diagnostic::format(&cli.input, &err));
            std::process::exit(err.exit_code());
        }
    }
}
