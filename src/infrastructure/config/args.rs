use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "agaaw",
    version,
    about = "Agaaw - Fly to your Future. Study-abroad onboarding in your terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Advance the home carousel automatically.
    #[arg(long)]
    pub autoplay: Option<bool>,

    /// Autoplay period in milliseconds.
    #[arg(long, value_name = "MS")]
    pub autoplay_interval_ms: Option<u64>,

    /// Enable `TachyonFX` slide transitions.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
