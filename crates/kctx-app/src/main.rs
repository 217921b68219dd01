mod cli;
mod runner;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Request};

const VERBOSE_FILTER: &str = "kctx=info,kctx_core=info,kctx_config=info";

fn main() -> ExitCode {
    let request = Request::from(Cli::parse());
    init_tracing(request.verbose);

    let code = runner::execute(&request, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
