//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::AppConfig;
use crate::assets::default_download_dir;
use crate::intro::{CompletionPolicy, IntroConfig, DEFAULT_CHAR_DELAY, DEFAULT_POST_DELAY};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Animated terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-tui", version, about)]
pub struct Cli {
    /// Profile JSON. Defaults to ./folio/profile.json, then the user config
    /// directory, then the built-in profile.
    #[arg(long, env = "FOLIO_CONTENT")]
    pub content: Option<PathBuf>,

    /// Directory holding the resume and profile image
    #[arg(long, env = "FOLIO_ASSETS", default_value = "public")]
    pub assets: PathBuf,

    /// Where the resume is exported (default: the user's download directory)
    #[arg(long, env = "FOLIO_DOWNLOAD_DIR")]
    pub download_dir: Option<PathBuf>,

    /// Delay between typed intro characters, in milliseconds
    #[arg(long, default_value_t = DEFAULT_CHAR_DELAY.as_millis() as u64)]
    pub char_delay_ms: u64,

    /// Pause after the intro banner, in milliseconds
    #[arg(long, default_value_t = DEFAULT_POST_DELAY.as_millis() as u64)]
    pub post_delay_ms: u64,

    /// Reveal only after the last character has been typed
    #[arg(long)]
    pub strict_reveal: bool,

    /// Start on the portfolio without the intro
    #[arg(long)]
    pub skip_intro: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        let policy = if self.strict_reveal {
            CompletionPolicy::AfterLastTick
        } else {
            CompletionPolicy::FixedDelay
        };

        AppConfig {
            intro: IntroConfig {
                char_delay: Duration::from_millis(self.char_delay_ms),
                post_delay: Duration::from_millis(self.post_delay_ms),
                policy,
                ..IntroConfig::default()
            },
            skip_intro: self.skip_intro,
            assets_dir: self.assets.clone(),
            download_dir: self.download_dir.clone().unwrap_or_else(default_download_dir),
        }
    }
}

/// Parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}
