//! Enums used throughout the portfolio
//!
//! The section set and the screen phases, plus the motion each section
//! plays when it swaps in or out.

use std::time::Duration;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Intro,     // Typewriter banner owns the terminal
    Portfolio, // Profile and tabbed sections
}

/// Content panel selectable from the tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Skills,
    Projects,
    Certifications,
    Work,
    Education,
}

impl Section {
    /// Tab order
    pub const ALL: [Section; 5] = [
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Work,
        Section::Education,
    ];

    /// Stable lowercase key
    pub fn key(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Work => "work",
            Section::Education => "education",
        }
    }

    /// Tab caption derived from the key
    pub fn label(&self) -> String {
        nice_name(self.key())
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Hotkey letter: first character of the key
    pub fn from_hotkey(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.key().starts_with(c))
    }

    /// Enter/exit motion for this panel
    pub fn motion(&self) -> Motion {
        match self {
            Section::Skills => Motion::new(MotionKind::Scale { from: 0.95 }, 350),
            Section::Projects => Motion::new(MotionKind::SlideX { enter: 40, exit: -40 }, 350),
            Section::Certifications => Motion::new(MotionKind::SlideY { enter: 30, exit: -30 }, 350),
            Section::Work => Motion::new(MotionKind::Scale { from: 0.98 }, 350),
            Section::Education => Motion::new(MotionKind::Tilt { degrees: 12 }, 450),
        }
    }
}

/// Capitalize the first letter and turn the first dash into a space
pub fn nice_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_uppercase(), rest.replacen('-', " ", 1))
        }
        None => String::new(),
    }
}

/// Shape of a panel transition. Offsets are in pixels; the renderer scales
/// them to cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionKind {
    Scale { from: f32 },
    SlideX { enter: i16, exit: i16 },
    SlideY { enter: i16, exit: i16 },
    Tilt { degrees: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub kind: MotionKind,
    pub duration: Duration,
}

impl Motion {
    const fn new(kind: MotionKind, millis: u64) -> Self {
        Self {
            kind,
            duration: Duration::from_millis(millis),
        }
    }
}
