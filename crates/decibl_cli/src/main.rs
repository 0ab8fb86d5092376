//! CLI smoke entry point.
//!
//! # Responsibility
//! - Boot `decibl_core` from an optional JSON config file.
//! - Print a short deterministic report of the seeded services.
//!
//! Usage: `decibl_cli [config.json]`

use decibl_core::{init_logging, AppConfig, DeciblApp};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("decibl_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_path(path)?,
        None => AppConfig::default(),
    };
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    println!("decibl_core ping={}", decibl_core::ping());
    println!("decibl_core version={}", decibl_core::core_version());

    let app = DeciblApp::bootstrap(&config)?;
    let summary = app.dashboard.summary().await;
    println!("voice_notes={}", summary.stats.total_notes);
    println!("reading_sessions={}", summary.stats.total_sessions);
    println!("hours_listened={}", summary.stats.hours_listened);
    for item in &summary.recent_activity {
        println!(
            "activity {:?} id={} at={}",
            item.kind,
            item.id,
            item.timestamp.to_rfc3339()
        );
    }

    let settings = app.settings.get().await?;
    println!(
        "settings voice={} speed={} theme={:?} language={}",
        settings.default_voice.as_str(),
        settings.default_speed,
        settings.theme,
        settings.language
    );
    log::info!("event=cli_report module=cli status=ok");
    Ok(())
}
