//! Welcome gate runner.
//!
//! Wires the flag store, media player, and welcome flow controller, then
//! drives the flow headlessly: media events advance it, `r` retries a failed
//! load, `s` or Ctrl-C skips, and completion hands off to the main
//! application placeholder.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use wg_app::{pump_media_events, WelcomeFlowController};
use wg_core::config::DEFAULT_VIDEO_URL;
use wg_core::ports::{FlagStorePort, WelcomeEventPort};
use wg_core::welcome::WelcomeFlowState;
use wg_core::{RuntimeTarget, WebFallbackMode, WelcomeFlowConfig, WELCOME_SEEN_KEY};
use wg_infra::FileFlagStore;
use wg_platform::{detect_runtime_target, select_media_player};

#[derive(Parser, Debug)]
#[command(name = "welcome-gate", about = "First-launch welcome video gate")]
struct Cli {
    /// Directory holding the persisted welcome flag
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Welcome video URL
    #[arg(long, default_value = DEFAULT_VIDEO_URL)]
    video_url: String,

    /// Play the video once instead of looping
    #[arg(long)]
    no_loop: bool,

    /// Disable the retry affordance on media failures
    #[arg(long)]
    no_retry: bool,

    /// Maximum number of retry attempts (unbounded when omitted)
    #[arg(long)]
    max_retries: Option<u32>,

    /// Skip video entirely on degraded targets
    #[arg(long)]
    static_fallback: bool,

    /// Override the detected runtime target
    #[arg(long, value_enum)]
    target: Option<TargetArg>,

    /// Clear the persisted flag and exit
    #[arg(long)]
    reset: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum TargetArg {
    Native,
    Web,
}

/// Logs state changes; stands in for the presentation layer.
struct LogWelcomeEvents;

#[async_trait::async_trait]
impl WelcomeEventPort for LogWelcomeEvents {
    async fn emit_welcome_state_changed(&self, state: WelcomeFlowState) {
        info!(state = ?state, "welcome state changed");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => dirs::data_local_dir()
            .context("no local data directory available")?
            .join("welcome-gate"),
    };
    let flag_store: Arc<dyn FlagStorePort> = Arc::new(FileFlagStore::with_defaults(data_dir));

    if cli.reset {
        flag_store.remove(WELCOME_SEEN_KEY).await?;
        info!("welcome flag cleared");
        return Ok(());
    }

    let config = WelcomeFlowConfig {
        video_url: cli.video_url,
        loop_video: !cli.no_loop,
        allow_retry: !cli.no_retry,
        max_retries: cli.max_retries,
        web_fallback: if cli.static_fallback {
            WebFallbackMode::StaticGreeting
        } else {
            WebFallbackMode::InlineVideo
        },
    };

    let target = match cli.target {
        Some(TargetArg::Native) => RuntimeTarget::Native,
        Some(TargetArg::Web) => RuntimeTarget::Web,
        None => detect_runtime_target(),
    };
    info!(?target, "runtime target resolved");

    let media_player = select_media_player(target, &config);
    let media_events = media_player.subscribe_events().await?;

    let controller = Arc::new(WelcomeFlowController::new(
        config,
        flag_store,
        media_player.clone(),
        Arc::new(LogWelcomeEvents),
    ));

    let state = controller.initialize().await;
    if state.is_completed() {
        run_main_application();
        return Ok(());
    }

    let mut pump = tokio::spawn(pump_media_events(Arc::clone(&controller), media_events));

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            _ = &mut pump => break,
            line = stdin.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match line.trim() {
                    "r" => {
                        controller.retry().await;
                    }
                    "s" => {
                        controller.complete().await;
                        break;
                    }
                    _ => {}
                },
                _ => stdin_open = false,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("skip requested");
                controller.complete().await;
                break;
            }
        }
    }

    media_player.teardown().await;
    run_main_application();
    Ok(())
}

fn run_main_application() {
    // Main application placeholder: the gate's job ends here.
    println!("Welcome complete. Launching main application…");
}
