#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sketchmentor_core::config::{default_data_dir, DEFAULT_STORAGE_KEY};
use sketchmentor_core::logging::{read_entries, ActivityEntry, LoggingBuilder};
use sketchmentor_core::WaitlistConfig;

/// Launch settings, set once from the command line
static LAUNCH: OnceLock<LaunchSettings> = OnceLock::new();

/// Settings the app shell reads when it builds the waitlist session.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub config: WaitlistConfig,
    /// Account the identity provider starts signed in as
    pub signed_in_as: Option<String>,
}

/// Get the launch settings (set from command line or default)
pub fn launch_settings() -> LaunchSettings {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchSettings {
        config: WaitlistConfig::default(),
        signed_in_as: None,
    })
}

/// SketchMentor - AI math tutoring waitlist
#[derive(Parser, Debug)]
#[command(name = "sketchmentor-desktop")]
#[command(about = "SketchMentor landing page with waitlist signup")]
struct Args {
    /// Data directory for local storage and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Simulated backend latency before a signup is confirmed
    #[arg(long, default_value_t = 1000)]
    confirmation_delay_ms: u64,

    /// Start signed in as this account (as if the provider remembered it)
    #[arg(long)]
    signed_in_as: Option<String>,

    /// Local storage key of the registration ledger
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Tracing filter (e.g. "sketchmentor_core=debug"); RUST_LOG overrides
    #[arg(long)]
    log_filter: Option<String>,

    /// Print the activity log of earlier sessions and exit
    #[arg(long)]
    show_activity: bool,
}

/// One line of `--show-activity` output.
fn activity_line(entry: &ActivityEntry) -> String {
    let mut line = format!(
        "{} {:<5} [{}] {}: {}",
        entry.ts, entry.level, entry.session, entry.target, entry.msg
    );
    if let Some(fields) = &entry.fields {
        line.push(' ');
        line.push_str(&fields.to_string());
    }
    line
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = WaitlistConfig::default()
        .with_data_dir(args.data_dir.unwrap_or_else(default_data_dir))
        .with_storage_key(args.storage_key)
        .with_confirmation_delay(Duration::from_millis(args.confirmation_delay_ms));

    if args.show_activity {
        for entry in read_entries(config.logs_dir())? {
            println!("{}", activity_line(&entry));
        }
        return Ok(());
    }

    let mut logging = LoggingBuilder::new().with_logs_dir(config.logs_dir());
    if let Some(filter) = args.log_filter {
        logging = logging.with_filter(filter);
    }
    let log_file = logging.init()?;

    tracing::info!(
        data_dir = %config.data_dir.display(),
        log_file = ?log_file,
        "Starting SketchMentor"
    );

    let _ = LAUNCH.set(LaunchSettings {
        config,
        signed_in_as: args.signed_in_as,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SketchMentor - Join the Waitlist")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
