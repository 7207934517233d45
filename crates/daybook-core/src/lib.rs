pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod graphic;
pub mod manager;
pub mod render;
pub mod session;
pub mod task;
pub mod view;

use std::ffi::OsString;
use std::io;

use clap::Parser;
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let pre = cli::preprocess_args(&raw_args)?;
    let cli = cli::GlobalCli::parse_from(pre.cleaned_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        "starting daybook session"
    );
    debug!(?pre.rc_overrides, "preprocessed rc overrides");

    let mut cfg = config::Config::load(cli.rcfile.as_deref())?;
    cfg.apply_overrides(
        pre.rc_overrides
            .into_iter()
            .chain(cli.rc_overrides.into_iter().map(|kv| (kv.key, kv.value))),
    );

    let mut app = app::App::new(&cfg);

    if cli.rest.is_empty() {
        session::run(&mut app, io::stdin().lock(), io::stdout().lock())?;
    } else {
        // one-shot mode: `;`-separated commands from the argument list
        let script = cli
            .rest
            .iter()
            .map(|arg| arg.to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join(" ")
            .split(';')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        session::run(&mut app, io::Cursor::new(script), io::stdout().lock())?;
    }

    info!("done");
    Ok(())
}
