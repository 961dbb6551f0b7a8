//! UI module for folio-tui
//!
//! This module contains the rendering functions for both screens: the intro
//! console and the portfolio page with its animated section panel.

mod helpers;
mod intro;
mod panels;
mod portfolio;
mod transition;

use std::time::Instant;

use ratatui::Frame;

use crate::app::App;
use crate::intro::Scheduler;
use crate::models::Screen;

pub use intro::render_intro;
pub use panels::scroll_limit;
pub use portfolio::{panel_width, render_portfolio};
pub use transition::{PanelFrame, PanelTransition};

/// Draw whichever screen currently owns the terminal
pub fn render<S: Scheduler>(frame: &mut Frame, app: &App<S>, now: Instant) {
    match app.screen {
        Screen::Intro => render_intro(
            frame,
            app.intro_text(),
            now.saturating_duration_since(app.started),
        ),
        Screen::Portfolio => render_portfolio(frame, app, now),
    }
}
