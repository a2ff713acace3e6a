use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use tempo::core::config;
use tempo::notify::HttpNotifier;
use tempo::tui;

/// How long to wait for queued webhook deliveries after the session ends.
const NOTIFY_FLUSH_LIMIT: Duration = Duration::from_secs(2);

#[derive(Parser)]
#[command(name = "tempo", about = "Work-session countdown timer with a task checklist")]
struct Args {
    /// Session length in minutes
    minutes: u64,

    /// Suppress all webhook notifications
    #[arg(long)]
    muted: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to tempo.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("tempo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tempo: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.muted);

    log::info!(
        "tempo starting: {} minute session (muted: {})",
        args.minutes,
        resolved.muted
    );

    let timeout = Duration::from_secs(args.minutes * 60);
    let notifier = Arc::new(HttpNotifier::new(resolved.webhook_url.clone()));
    let result = tui::run(notifier.clone(), resolved.muted, timeout);

    // The terminal Complete/Quit event may still be queued; drain it before
    // the runtime shuts the delivery worker down.
    notifier.shutdown(NOTIFY_FLUSH_LIMIT).await;

    result
}
