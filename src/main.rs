//! spring-smart - A terminal storefront demo
//!
//! Login screen, product list, product details and a few static pages.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod navigation;
mod theme;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;

fn main() -> Result<()> {
    // Load config; a broken file falls back to defaults once logging is up
    let (config, config_error) = match Config::load() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_path = logging::init(&config);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default config");
    }
    tracing::info!(log = ?log_path, tick_rate_ms = config.tick_rate_ms, "starting");

    // Setup terminal
    let mut tui = Tui::new()?
        .with_tick_rate(config.tick_rate())
        .with_mouse_capture(config.mouse_capture);
    tui.enter()?;

    // Create app state
    let mut app = App::new();
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("stopped");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                tracing::trace!(%action, "dispatch");
                app.dispatch(action)?;
            }
        } else {
            // No event - send a tick
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
