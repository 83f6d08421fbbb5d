//! Egg Timer — a boiled-egg timer for the desktop
//!
//! The egg reddens as the boil progresses; the field counts down the
//! seconds left.

mod app;
mod config;
mod egg;
mod error;
mod session;
mod ticker;

use app::EggTimerApp;
use config::TimerConfig;
use eframe::NativeOptions;
use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(TimerConfig::default()) {
        tracing::error!("egg timer failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: TimerConfig) -> Result<()> {
    // Never joined: the thread dies with the process.
    let (_ticker, ticks) = ticker::spawn(config.tick_interval, config.tick_increment, config.tick_queue)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title),
        ..Default::default()
    };

    tracing::info!(title = config.title, "opening window");
    eframe::run_native(
        config.title,
        options,
        Box::new(move |cc| {
            eggcore::EggTheme::default().apply(&cc.egui_ctx);
            Box::new(EggTimerApp::new(&config, ticks))
        }),
    )?;

    tracing::info!("window closed");
    Ok(())
}
