//! Application state and core logic for the portfolio.
//!
//! This module contains the `App` struct which owns the intro sequencer,
//! the section viewer, and presentation-only state such as the running
//! panel transition and the status bar message.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::assets;
use crate::intro::{IntroConfig, IntroEvent, IntroSequencer, Scheduler, SystemScheduler};
use crate::models::{Profile, Screen, Section};
use crate::ui::{PanelFrame, PanelTransition};
use crate::viewer::{SectionViewer, Selection};

/// How long a status message stays in the bottom bar
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Runtime options resolved from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub intro: IntroConfig,
    pub skip_intro: bool,
    pub assets_dir: PathBuf,
    pub download_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

/// Application state
pub struct App<S: Scheduler = SystemScheduler> {
    pub screen: Screen,
    pub profile: Profile,
    pub assets_dir: PathBuf,
    pub download_dir: PathBuf,
    // Present only while the intro owns the screen
    pub intro: Option<IntroSequencer<S>>,
    pub viewer: SectionViewer,
    pub transition: Option<PanelTransition>,
    pub status: Option<StatusMessage>,
    pub started: Instant,
    // Width of the content panel at the last draw, for scroll limits
    pub panel_width: u16,
    pub should_quit: bool,
}

impl App<SystemScheduler> {
    pub fn new(profile: Profile, config: AppConfig) -> Self {
        Self::with_scheduler(profile, config, SystemScheduler::new())
    }
}

impl<S: Scheduler> App<S> {
    pub fn with_scheduler(profile: Profile, config: AppConfig, scheduler: S) -> Self {
        let (screen, intro) = if config.skip_intro {
            (Screen::Portfolio, None)
        } else {
            (
                Screen::Intro,
                Some(IntroSequencer::start(scheduler, config.intro)),
            )
        };

        Self {
            screen,
            profile,
            assets_dir: config.assets_dir,
            download_dir: config.download_dir,
            intro,
            viewer: SectionViewer::new(),
            transition: None,
            status: None,
            started: Instant::now(),
            panel_width: 80,
            should_quit: false,
        }
    }

    /// Advance timers and expire presentation state
    pub fn tick(&mut self, now: Instant) {
        if let Some(intro) = self.intro.as_mut() {
            if intro.pump() == IntroEvent::Revealed {
                self.finish_intro();
            }
        }

        if self.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }

        if self
            .status
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.shown_at) >= STATUS_TTL)
        {
            self.status = None;
        }
    }

    /// Hand the screen from the intro to the portfolio. Dropping the
    /// sequencer releases any timer still armed.
    fn finish_intro(&mut self) {
        self.intro = None;
        self.screen = Screen::Portfolio;
        tracing::info!("portfolio shown");
    }

    /// Text typed so far by the intro
    pub fn intro_text(&self) -> &str {
        self.intro.as_ref().map_or("", |i| i.revealed_text())
    }

    pub fn active_section(&self) -> Section {
        self.viewer.active()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        if self.screen == Screen::Intro {
            return;
        }

        // Letter and digit bindings only answer to bare or shifted presses
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

        match key.code {
            KeyCode::Char(_) if !plain => {}
            KeyCode::Tab | KeyCode::Right => {
                let selection = self.viewer.select_next();
                self.apply_selection(selection, now);
            }
            KeyCode::BackTab | KeyCode::Left => {
                let selection = self.viewer.select_previous();
                self.apply_selection(selection, now);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = crate::ui::scroll_limit(&self.profile, self.viewer.active(), self.panel_width);
                self.viewer.scroll_down(max);
            }
            KeyCode::Up | KeyCode::Char('k') => self.viewer.scroll_up(),
            KeyCode::Char('r') => self.export_resume(now),
            KeyCode::Char('l') => self.open_linkedin(now),
            KeyCode::Char(c) => {
                let section = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Section::from_index)
                    .or_else(|| Section::from_hotkey(c));
                if let Some(section) = section {
                    self.select(section, now);
                }
            }
            _ => {}
        }
    }

    /// Select a section. The active section changes immediately; the swap
    /// animation is only queued for drawing.
    pub fn select(&mut self, section: Section, now: Instant) -> Selection {
        let selection = self.viewer.select(section);
        self.apply_selection(selection, now);
        selection
    }

    fn apply_selection(&mut self, selection: Selection, now: Instant) {
        if !selection.changed() {
            return;
        }
        self.transition = match &self.transition {
            Some(running) if !running.is_finished(now) => Some(running.retarget(selection.current, now)),
            _ => PanelTransition::new(selection.previous, selection.current, now),
        };
    }

    /// What the content panel should draw at `now`
    pub fn panel_frame(&self, now: Instant) -> PanelFrame {
        match &self.transition {
            Some(t) if !t.is_finished(now) => t.frame_at(now),
            _ => PanelFrame::settled(self.viewer.active()),
        }
    }

    fn export_resume(&mut self, now: Instant) {
        let Some(resume) = self.profile.links.resume.clone() else {
            self.set_status("No resume configured", StatusKind::Error, now);
            return;
        };
        match assets::export_resume(&self.assets_dir, &resume, &self.download_dir) {
            Ok(path) => {
                self.set_status(format!("Resume saved to {}", path.display()), StatusKind::Info, now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "resume export failed");
                self.set_status(e.to_string(), StatusKind::Error, now);
            }
        }
    }

    fn open_linkedin(&mut self, now: Instant) {
        let Some(url) = self.profile.links.linkedin.clone() else {
            self.set_status("No profile link configured", StatusKind::Error, now);
            return;
        };
        match assets::open_link(&url) {
            Ok(()) => self.set_status(format!("Opened {url}"), StatusKind::Info, now),
            Err(e) => {
                tracing::warn!(error = %e, "link open failed");
                self.set_status(e.to_string(), StatusKind::Error, now);
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            shown_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::{CompletionPolicy, ManualScheduler};
    use crossterm::event::KeyEventKind;
    use std::fs;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn config(skip_intro: bool) -> AppConfig {
        AppConfig {
            intro: IntroConfig {
                source: "AB".to_string(),
                char_delay: Duration::from_millis(40),
                post_delay: Duration::from_millis(500),
                policy: CompletionPolicy::FixedDelay,
            },
            skip_intro,
            assets_dir: PathBuf::from("public"),
            download_dir: PathBuf::from("."),
        }
    }

    fn portfolio_app() -> App<ManualScheduler> {
        App::with_scheduler(Profile::embedded().unwrap(), config(true), ManualScheduler::new())
    }

    #[test]
    fn test_intro_hands_off_to_portfolio() {
        let mut sched = ManualScheduler::new();
        let mut app = App::with_scheduler(Profile::embedded().unwrap(), config(false), &mut sched);
        let now = Instant::now();
        assert_eq!(app.screen, Screen::Intro);

        app.intro.as_mut().unwrap().scheduler_mut().advance(Duration::from_millis(80));
        app.tick(now);
        assert_eq!(app.intro_text(), "AB");
        assert_eq!(app.screen, Screen::Intro);

        app.intro.as_mut().unwrap().scheduler_mut().advance(Duration::from_millis(500));
        app.tick(now);
        assert_eq!(app.screen, Screen::Portfolio);
        assert!(app.intro.is_none());
        assert_eq!(app.active_section(), Section::Skills);

        drop(app);
        assert_eq!(sched.armed_count(), 0);
    }

    #[test]
    fn test_quit_during_intro_releases_timers() {
        let mut sched = ManualScheduler::new();
        {
            let mut app = App::with_scheduler(Profile::embedded().unwrap(), config(false), &mut sched);
            app.handle_key(key(KeyCode::Char('q')), Instant::now());
            assert!(app.should_quit);
        }
        assert_eq!(sched.armed_count(), 0);
    }

    #[test]
    fn test_section_keys_ignored_during_intro() {
        let mut app = App::with_scheduler(Profile::embedded().unwrap(), config(false), ManualScheduler::new());
        app.handle_key(key(KeyCode::Char('e')), Instant::now());
        assert_eq!(app.active_section(), Section::Skills);
    }

    #[test]
    fn test_skip_intro_starts_on_portfolio() {
        let app = portfolio_app();
        assert_eq!(app.screen, Screen::Portfolio);
        assert_eq!(app.intro_text(), "");
    }

    #[test]
    fn test_selection_is_immediate_while_animating() {
        let mut app = portfolio_app();
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('5')), now);
        assert_eq!(app.active_section(), Section::Education);
        // Skills is still leaving the screen
        assert_eq!(app.panel_frame(now).section, Section::Skills);

        app.handle_key(key(KeyCode::Char('s')), now + Duration::from_millis(10));
        assert_eq!(app.active_section(), Section::Skills);
    }

    #[test]
    fn test_education_then_skills_leaves_no_residue() {
        let mut app = portfolio_app();
        let t0 = Instant::now();
        app.select(Section::Education, t0);
        app.select(Section::Skills, t0 + Duration::from_millis(5));

        let later = t0 + Duration::from_secs(5);
        app.tick(later);
        assert!(app.transition.is_none());
        assert_eq!(app.active_section(), Section::Skills);
        assert_eq!(app.panel_frame(later), PanelFrame::settled(Section::Skills));
    }

    #[test]
    fn test_reselect_creates_no_transition() {
        let mut app = portfolio_app();
        let selection = app.select(Section::Skills, Instant::now());
        assert!(!selection.changed());
        assert!(app.transition.is_none());
    }

    #[test]
    fn test_tab_and_arrows_cycle() {
        let mut app = portfolio_app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Tab), now);
        assert_eq!(app.active_section(), Section::Projects);
        app.handle_key(key(KeyCode::Left), now);
        app.handle_key(key(KeyCode::Left), now);
        assert_eq!(app.active_section(), Section::Education);
        app.handle_key(key(KeyCode::BackTab), now);
        assert_eq!(app.active_section(), Section::Work);
    }

    #[test]
    fn test_modified_letters_are_ignored() {
        let mut app = portfolio_app();
        let now = Instant::now();
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            app.handle_key(KeyEvent::new(KeyCode::Char('e'), modifiers), now);
            app.handle_key(KeyEvent::new(KeyCode::Char('1'), modifiers), now);
            app.handle_key(KeyEvent::new(KeyCode::Char('r'), modifiers), now);
            app.handle_key(KeyEvent::new(KeyCode::Char('l'), modifiers), now);
        }
        assert_eq!(app.active_section(), Section::Skills);
        assert!(app.status.is_none());
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT), now);
        assert_eq!(app.active_section(), Section::Work);
    }

    #[test]
    fn test_scroll_keys_respect_limit() {
        let mut app = portfolio_app();
        let now = Instant::now();
        app.select(Section::Work, now);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char('j')), now);
        }
        assert_eq!(app.viewer.scroll(), 1);
        app.handle_key(key(KeyCode::Up), now);
        assert_eq!(app.viewer.scroll(), 0);
    }

    #[test]
    fn test_resume_export_reports_status() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        let mut app = portfolio_app();
        app.assets_dir = assets.path().to_path_buf();
        app.download_dir = downloads.path().to_path_buf();
        app.profile.links.resume = Some(PathBuf::from("cv.pdf"));
        fs::write(assets.path().join("cv.pdf"), b"resume").unwrap();

        let now = Instant::now();
        app.handle_key(key(KeyCode::Char('r')), now);

        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Info);
        assert!(status.text.contains("cv.pdf"));
        assert_eq!(fs::read(downloads.path().join("cv.pdf")).unwrap(), b"resume");

        app.tick(now + STATUS_TTL);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_resume_export_failure_is_not_fatal() {
        let assets = tempfile::tempdir().unwrap();
        let mut app = portfolio_app();
        app.assets_dir = assets.path().to_path_buf();
        app.profile.links.resume = Some(PathBuf::from("missing.pdf"));

        app.handle_key(key(KeyCode::Char('r')), Instant::now());
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_missing_link_reports_error() {
        let mut app = portfolio_app();
        app.profile.links.linkedin = None;
        app.handle_key(key(KeyCode::Char('l')), Instant::now());
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }
}
