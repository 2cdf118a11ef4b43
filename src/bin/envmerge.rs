//! envmerge CLI Binary
//!
//! Command-line entry point: merge SMS gateway settings into a Lambda function's
//! environment configuration.

use clap::Parser;
use envmerge::logging::init_logging;
use envmerge::tooling::cli::{Cli, CliContext};
use std::io::Write;
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = init_logging(Some(&context.config().logging), cli.log_file.clone()) {
        eprintln!("Warning: {}", e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = context.execute(&cli.command, &mut out) {
        let _ = out.flush();
        eprintln!("❌ {}", e);
        process::exit(e.exit_code());
    }
}
