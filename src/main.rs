use anyhow::Result;
use clap::Parser;
use nextcloud_munin::{
    config::Config,
    plugin::{self, Mode, Plugin},
};
use std::io::{BufWriter, Write};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph to report (users, shares, dbsize, available_updates, storages,
    /// filecount, multi); defaults to the name the binary is invoked under
    #[arg(long, env = "NEXTCLOUD_PLUGIN")]
    plugin: Option<Plugin>,

    /// Munin mode: `config`, `autoconf`, or nothing to fetch values
    #[arg(allow_hyphen_values = true)]
    mode: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout belongs to munin, logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let plugin = args
        .plugin
        .or_else(|| {
            std::env::args_os()
                .next()
                .and_then(|program| program.into_string().ok())
                .and_then(|program| Plugin::from_program_name(&program))
        })
        .unwrap_or(Plugin::Multi);
    let mode = Mode::from_arg(args.mode.first().map(String::as_str));
    debug!("Resolved plugin {} with mode {:?}", plugin, mode);

    let config = Config::load();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    plugin::start(plugin, mode, config, &mut out).await?;
    out.flush()?;

    Ok(())
}
