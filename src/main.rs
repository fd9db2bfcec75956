// ABOUTME: Main entry point for the ShopTalk merchant console
//
// Binary: shoptalk
// Usage: shoptalk [COMMAND]
// - No command: launches the dashboard TUI
// - onboard: run the onboarding wizard
// - status: fetch and print the store profile

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, IsTerminal},
    sync::Arc,
    time::{Duration, Instant},
};

mod api;
mod app;
mod cli;
mod components;
mod config;
mod models;
mod panels;

use app::{App, EventHandler};
use components::LayoutComponent;
use config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();
    let config = AppConfig::load()?;

    let result = match &args.command {
        Some(cli::Commands::Status) => {
            let seller_id =
                cli::resolve_seller_id(args.seller_id.as_deref(), args.launch_url.as_deref());
            cli::status::execute(seller_id, args.format).await
        }
        Some(cli::Commands::Onboard(onboard_args)) => {
            let (shop, access_token) =
                cli::resolve_onboarding_context(onboard_args, args.launch_url.as_deref());
            let mut app = new_app(&config)?;
            app.state.start_onboarding(shop, access_token);
            run_tui(&mut app, &config).await
        }
        Some(cli::Commands::Tui) | None => {
            let seller_id =
                cli::resolve_seller_id(args.seller_id.as_deref(), args.launch_url.as_deref());
            let mut app = new_app(&config)?;
            app.state.start_dashboard(seller_id);
            run_tui(&mut app, &config).await
        }
    };

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn new_app(config: &AppConfig) -> Result<App> {
    let client = api::StorefrontClient::new(&config.api_base_url, config.request_timeout())?;
    Ok(App::new(Arc::new(client)))
}

async fn run_tui(app: &mut App, config: &AppConfig) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, config, &mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_tui_loop(
    app: &mut App,
    config: &AppConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let layout = LayoutComponent::new();
    let tick_rate = config.tick_rate();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                EventHandler::handle_key_event(key_event, &mut app.state);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.state.tick(Instant::now());
            last_tick = Instant::now();
        }

        // The UI thread only suspends here, on the single queued request.
        app.drain_async_action().await;

        if app.state.should_quit {
            return Ok(());
        }
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".shoptalk").join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".shoptalk/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "shoptalk-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shoptalk=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
