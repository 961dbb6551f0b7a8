//! Section panel rendering
//!
//! Every section is a column of cards except Skills, which is a grid.
//! Scrolling is measured in cards (grid rows for Skills).

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::wrap_text;
use crate::models::{Profile, Section};
use crate::theme::{
    fade, BORDER_SUBTLE, CARD_BG, PAGE_BG, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
};

/// Below this opacity a panel is not drawn at all
const MIN_VISIBLE_OPACITY: f32 = 0.05;

/// Skills per grid row on wide and narrow panels
const GRID_COLUMNS_WIDE: usize = 3;
const GRID_COLUMNS_NARROW: usize = 2;
const NARROW_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLineKind {
    Body,
    Muted,
}

/// One content card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<(CardLineKind, String)>,
}

impl Card {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: Vec::new(),
        }
    }

    fn line(mut self, kind: CardLineKind, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.lines.push((kind, text));
        }
        self
    }

    /// Rows needed at `width` including borders
    pub fn height(&self, width: u16) -> u16 {
        let inner = usize::from(width.saturating_sub(4));
        let title = wrap_text(&self.title, inner).len();
        let body: usize = self
            .lines
            .iter()
            .map(|(_, text)| wrap_text(text, inner).len())
            .sum();
        (title + body + 2) as u16
    }
}

/// Cards for a card-style section. Empty for Skills.
pub fn section_cards(profile: &Profile, section: Section) -> Vec<Card> {
    match section {
        Section::Skills => Vec::new(),
        Section::Projects => profile
            .projects
            .iter()
            .map(|p| Card::new(&p.title).line(CardLineKind::Body, format!("Purpose: {}", p.purpose)))
            .collect(),
        Section::Certifications => profile
            .certifications
            .iter()
            .map(|c| Card::new(&c.title).line(CardLineKind::Muted, c.description.as_str()))
            .collect(),
        Section::Work => profile
            .work
            .iter()
            .map(|w| {
                let when_where = match (w.period.is_empty(), w.location.is_empty()) {
                    (false, false) => format!("{} | {}", w.period, w.location),
                    (false, true) => w.period.clone(),
                    (true, false) => w.location.clone(),
                    (true, true) => String::new(),
                };
                Card::new(&w.employer)
                    .line(CardLineKind::Muted, when_where)
                    .line(CardLineKind::Body, w.summary.as_str())
            })
            .collect(),
        Section::Education => profile
            .education
            .iter()
            .map(|e| {
                Card::new(&e.school)
                    .line(CardLineKind::Muted, e.program.as_str())
                    .line(CardLineKind::Muted, e.period.as_str())
            })
            .collect(),
    }
}

fn grid_columns(width: u16) -> usize {
    if width < NARROW_WIDTH {
        GRID_COLUMNS_NARROW
    } else {
        GRID_COLUMNS_WIDE
    }
}

/// Largest useful scroll offset for a section at `width`
pub fn scroll_limit(profile: &Profile, section: Section, width: u16) -> usize {
    let units = match section {
        Section::Skills => profile.skills.len().div_ceil(grid_columns(width)),
        _ => section_cards(profile, section).len(),
    };
    units.saturating_sub(1)
}

/// Draw `section` inside `area`, skipping `scroll` cards or grid rows
pub fn render_section(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    section: Section,
    scroll: usize,
    opacity: f32,
) {
    if opacity < MIN_VISIBLE_OPACITY || area.width < 4 || area.height == 0 {
        return;
    }

    match section {
        Section::Skills => render_skills_grid(frame, area, &profile.skills, scroll, opacity),
        _ => render_cards(frame, area, &section_cards(profile, section), scroll, opacity),
    }
}

fn card_block(opacity: f32) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(fade(BORDER_SUBTLE, PAGE_BG, opacity)))
        .style(Style::default().bg(fade(CARD_BG, PAGE_BG, opacity)))
}

fn render_skills_grid(frame: &mut Frame, area: Rect, skills: &[String], scroll: usize, opacity: f32) {
    let columns = grid_columns(area.width);
    let text_style = Style::default()
        .fg(fade(TEXT_PRIMARY, CARD_BG, opacity))
        .add_modifier(Modifier::BOLD);

    let mut y = area.y;
    for row in skills.chunks(columns).skip(scroll) {
        // 3 rows per card plus a one-row gap
        if y + 3 > area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, 3);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(1)
            .split(row_area);

        for (skill, cell) in row.iter().zip(cells.iter()) {
            let paragraph = Paragraph::new(Line::from(Span::styled(skill.clone(), text_style)))
                .alignment(Alignment::Center)
                .block(card_block(opacity));
            frame.render_widget(paragraph, *cell);
        }
        y += 4;
    }
}

fn render_cards(frame: &mut Frame, area: Rect, cards: &[Card], scroll: usize, opacity: f32) {
    let title_style = Style::default()
        .fg(fade(TEXT_PRIMARY, CARD_BG, opacity))
        .add_modifier(Modifier::BOLD);
    let body_style = Style::default().fg(fade(TEXT_PRIMARY, CARD_BG, opacity));
    let muted_style = Style::default().fg(fade(TEXT_MUTED, CARD_BG, opacity));
    let inner_width = usize::from(area.width.saturating_sub(4));

    let mut y = area.y;
    for card in cards.iter().skip(scroll) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }
        let height = card.height(area.width).min(remaining);

        let mut lines: Vec<Line> = wrap_text(&card.title, inner_width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, title_style)))
            .collect();
        for (kind, text) in &card.lines {
            let style = match kind {
                CardLineKind::Body => body_style,
                CardLineKind::Muted => muted_style,
            };
            lines.extend(
                wrap_text(text, inner_width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, style))),
            );
        }

        let paragraph = Paragraph::new(lines).block(card_block(opacity).padding(
            ratatui::widgets::Padding::horizontal(1),
        ));
        frame.render_widget(paragraph, Rect::new(area.x, y, area.width, height));
        y += height + 1;
    }
}
