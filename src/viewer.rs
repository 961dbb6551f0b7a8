//! Active section selection.
//!
//! The logical switch is synchronous: `select` replaces the active section
//! before anything is drawn. Panel animation lives in `ui::transition` and
//! only reads the change reported here.

use crate::models::Section;

/// Outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub previous: Section,
    pub current: Section,
}

impl Selection {
    /// Reselecting the active tab changes nothing on screen
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Holds the single active section and the panel scroll offset
#[derive(Debug, Clone, Default)]
pub struct SectionViewer {
    active: Section,
    scroll: usize,
}

impl SectionViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Make `section` active. Valid for any section, including the current one.
    pub fn select(&mut self, section: Section) -> Selection {
        let previous = std::mem::replace(&mut self.active, section);
        if previous != section {
            self.scroll = 0;
            tracing::debug!(from = previous.key(), to = section.key(), "section selected");
        }
        Selection {
            previous,
            current: section,
        }
    }

    pub fn select_next(&mut self) -> Selection {
        self.select(self.active.next())
    }

    pub fn select_previous(&mut self) -> Selection {
        self.select(self.active.previous())
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_down(&mut self, max: usize) {
        self.scroll = (self.scroll + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
