//! Portfolio page rendering: header, about, tab strip, panel, footer and
//! the status bar.

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{centered_column, centered_rect, wrap_text};
use super::panels::render_section;
use crate::app::{App, StatusKind};
use crate::intro::Scheduler;
use crate::models::Section;
use crate::theme::{
    ACCENT, ACCENT_DEEP, ACCENT_SOFT, BORDER_SUBTLE, CARD_BG, PAGE_BG, ROUNDED_BORDERS,
    STATUS_ERROR, TAB_ACTIVE_BG, TEXT_ABOUT, TEXT_FOOTER, TEXT_HEADLINE, TEXT_PRIMARY, TEXT_TITLE,
};
use crate::utils::{copyright_line, current_year};

/// Widest the about text and panel are allowed to grow
const ABOUT_MAX_WIDTH: u16 = 80;
const PANEL_MAX_WIDTH: u16 = 100;

const HEADER_HEIGHT: u16 = 6;
const FOOTER_HEIGHT: u16 = 3;

const KEY_HINTS: &str =
    " q: Quit | Tab/←→: Section | 1-5: Jump | j/k: Scroll | r: Resume | l: LinkedIn ";

/// Panel width for a terminal `total` columns wide
pub fn panel_width(total: u16) -> u16 {
    total.min(PANEL_MAX_WIDTH)
}

pub fn render_portfolio<S: Scheduler>(frame: &mut Frame, app: &App<S>, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(PAGE_BG)), area);

    let about_width = area.width.min(ABOUT_MAX_WIDTH);
    let about_lines = wrap_text(&app.profile.about, usize::from(about_width));
    let about_height = if app.profile.about.is_empty() {
        0
    } else {
        about_lines.len() as u16 + 2
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(about_height),
            Constraint::Length(1), // Tab strip
            Constraint::Length(1), // Gap
            Constraint::Min(3),    // Panel
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, layout[0], app);
    render_about(frame, layout[1], about_lines);
    render_tabs(frame, layout[2], app.active_section());
    render_panel(frame, layout[4], app, now);
    render_footer(frame, layout[5], app);
    render_status_bar(frame, layout[6], app);
}

fn render_header<S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Avatar badge
            Constraint::Length(1), // Name
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Buttons
        ])
        .split(area);

    let badge = Paragraph::new(Line::from(Span::styled(
        app.profile.initials(),
        Style::default().fg(TEXT_TITLE).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(CARD_BG)),
    );
    frame.render_widget(badge, centered_rect(rows[0], 8, 3));

    let name = Paragraph::new(Span::styled(
        app.profile.name.clone(),
        Style::default().fg(TEXT_TITLE).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(name, rows[1]);

    let headline = Paragraph::new(Span::styled(
        app.profile.headline.clone(),
        Style::default().fg(TEXT_HEADLINE),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(headline, rows[2]);

    let mut buttons = Vec::new();
    if app.profile.links.resume.is_some() {
        buttons.push(Span::styled(
            " r  Download Resume ",
            Style::default()
                .fg(CARD_BG)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if app.profile.links.linkedin.is_some() {
        if !buttons.is_empty() {
            buttons.push(Span::raw("  "));
        }
        buttons.push(Span::styled(
            " l  LinkedIn ",
            Style::default()
                .fg(ACCENT_DEEP)
                .bg(ACCENT_SOFT)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
        rows[3],
    );
}

fn render_about(frame: &mut Frame, area: Rect, about_lines: Vec<String>) {
    if area.height == 0 {
        return;
    }
    let column = centered_column(area, ABOUT_MAX_WIDTH);

    let mut lines = vec![Line::from(Span::styled(
        "About Me",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        about_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_ABOUT)))),
    );

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), column);
}

/// Tab caption with its number key
fn tab_caption(section: Section) -> String {
    format!(" {} {} ", section.index() + 1, section.label())
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Section) {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if section == active {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(TAB_ACTIVE_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_PRIMARY).bg(CARD_BG)
        };
        spans.push(Span::styled(tab_caption(section), style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_panel<S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<S>, now: Instant) {
    let column = centered_column(area, PANEL_MAX_WIDTH);
    let panel = app.panel_frame(now);
    // Scroll belongs to the active section; a panel on its way out draws from the top
    let scroll = if panel.section == app.active_section() {
        app.viewer.scroll()
    } else {
        0
    };

    render_section(
        frame,
        panel.apply(column),
        &app.profile,
        panel.section,
        scroll,
        panel.opacity,
    );
}

fn render_footer<S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut lines = Vec::new();
    if app.profile.links.resume.is_some() {
        lines.push(Line::from(Span::styled(
            "Download Resume (PDF) [r]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        copyright_line(current_year(), &app.profile.name),
        Style::default().fg(TEXT_FOOTER),
    )));

    let footer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(BORDER_SUBTLE)),
        );
    frame.render_widget(footer, area);
}

fn render_status_bar<S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let (text, bg) = match &app.status {
        Some(status) => {
            let bg = match status.kind {
                StatusKind::Info => ACCENT,
                StatusKind::Error => STATUS_ERROR,
            };
            (format!(" {} ", status.text), bg)
        }
        None => (KEY_HINTS.to_string(), ACCENT),
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(CARD_BG).bg(bg)),
        area,
    );
}
