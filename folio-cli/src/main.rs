use std::{path::PathBuf, process::ExitCode as ProcessExitCode, sync::Arc};

use clap::Parser;
use folio_lib::{CoreConfig, NoticeStyle, ProfileStore};
use parking_lot::RwLock;
use sysexits::ExitCode;
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::notifier::TerminalNotifier;

mod notifier;
mod profile;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: profile::Command,

    /// Override the profile database location
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Override how notices are rendered (plain, color)
    #[arg(long, global = true)]
    notice_style: Option<NoticeStyle>,
}

fn main() -> ProcessExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
    }

    let cli = Cli::parse();

    run(cli).into()
}

fn run(cli: Cli) -> ExitCode {
    let mut config = match CoreConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::Config;
        }
    };
    if let Some(store) = cli.store {
        config.store_path = Some(store);
    }
    if let Some(style) = cli.notice_style {
        config.notice_style = style;
    }

    let notifier = TerminalNotifier::new(config.notice_style);
    let cfg = Arc::new(RwLock::new(config));

    let store = match ProfileStore::open(&cfg) {
        Ok(store) => store,
        Err(err) => {
            error!("{err}");
            return ExitCode::IoErr;
        }
    };

    profile::handle(&store, &notifier, &cli.command)
}
