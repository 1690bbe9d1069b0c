mod version;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use sp_status_core::config::resolve_backup_dir;
use sp_status_core::current_status;
use sp_status_core::report::{render, OutputMode};

const WAYBAR_FLAG: &str = "--waybar";

#[derive(Parser, Debug, Default)]
#[command(
    name = "sp-status",
    version = version::FULL,
    about = "Print the active Super Productivity task from its latest backup"
)]
struct Cli {
    /// Emit a Waybar JSON object instead of plain text
    #[arg(long)]
    waybar: bool,
    /// Read backups from DIR instead of ~/.config/superProductivity/backups
    #[arg(long, value_name = "DIR")]
    backup_dir: Option<PathBuf>,
    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn mode(&self) -> OutputMode {
        if self.waybar {
            OutputMode::Waybar
        } else {
            OutputMode::Text
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => {
            init_logging(cli.verbose);
            cli
        }
        // --help and --version print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            init_logging(0);
            debug!(kind = ?err.kind(), "ignoring unrecognised arguments");
            Cli {
                waybar: std::env::args().nth(1).as_deref() == Some(WAYBAR_FLAG),
                ..Cli::default()
            }
        }
    };

    if let Err(err) = run(&cli) {
        warn!("failed to report status: {err:#}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let backup_dir = resolve_backup_dir(cli.backup_dir.as_deref());
    match &backup_dir {
        Some(dir) => debug!(dir = %dir.display(), "using backup directory"),
        None => debug!("unable to resolve home directory; reporting idle"),
    }

    let task = current_status(backup_dir.as_deref());
    let line = render(&task, cli.mode()).context("failed to encode status")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").context("failed to write status")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
