//! Typewriter reveal of the loading banner.

use std::time::Duration;

use super::scheduler::{Scheduler, TimerId};

/// Banner typed out before the portfolio appears
pub const LOADING_TEXT: &str = "$\n> Loading....";

/// Delay between two typed characters
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(40);

/// Pause after the banner before the portfolio is revealed
pub const DEFAULT_POST_DELAY: Duration = Duration::from_millis(500);

/// How the reveal timer is armed relative to typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionPolicy {
    /// Armed at start for `len * char_delay + post_delay`, independent of ticks
    #[default]
    FixedDelay,
    /// Armed for `post_delay` once the last character has been typed
    AfterLastTick,
}

/// Intro phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    #[default]
    Typing,
    Revealed,
}

/// What a call to `IntroSequencer::pump` changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    Idle,
    /// This many characters were appended
    Typed(usize),
    /// The reveal flag flipped during this pump
    Revealed,
}

#[derive(Debug, Clone)]
pub struct IntroConfig {
    pub source: String,
    pub char_delay: Duration,
    pub post_delay: Duration,
    pub policy: CompletionPolicy,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            source: LOADING_TEXT.to_string(),
            char_delay: DEFAULT_CHAR_DELAY,
            post_delay: DEFAULT_POST_DELAY,
            policy: CompletionPolicy::default(),
        }
    }
}

impl IntroConfig {
    /// Delay of the fixed reveal timer: `len * char_delay + post_delay`
    pub fn reveal_delay(&self) -> Duration {
        let len = u32::try_from(self.source.chars().count()).unwrap_or(u32::MAX);
        self.char_delay.saturating_mul(len).saturating_add(self.post_delay)
    }
}

/// Reveals a fixed string one character per tick, then flips a one-shot
/// reveal flag. Owns its two timers: dropping or tearing down the sequencer
/// cancels whichever are still armed.
pub struct IntroSequencer<S: Scheduler> {
    scheduler: S,
    source: Vec<char>,
    revealed: String,
    post_delay: Duration,
    policy: CompletionPolicy,
    phase: IntroPhase,
    tick_timer: Option<TimerId>,
    reveal_timer: Option<TimerId>,
    ticks: usize,
    torn_down: bool,
}

impl<S: Scheduler> IntroSequencer<S> {
    /// Activate the sequence: arms the typing timer and, for
    /// `CompletionPolicy::FixedDelay`, the reveal timer.
    pub fn start(mut scheduler: S, config: IntroConfig) -> Self {
        let source: Vec<char> = config.source.chars().collect();

        let tick_timer = if source.is_empty() {
            None
        } else {
            Some(scheduler.schedule_repeating(config.char_delay))
        };

        let reveal_timer = match config.policy {
            CompletionPolicy::FixedDelay => Some(scheduler.schedule_once(config.reveal_delay())),
            CompletionPolicy::AfterLastTick if source.is_empty() => {
                Some(scheduler.schedule_once(config.post_delay))
            }
            CompletionPolicy::AfterLastTick => None,
        };

        tracing::debug!(
            chars = source.len(),
            char_delay_ms = config.char_delay.as_millis() as u64,
            policy = ?config.policy,
            "intro started"
        );

        Self {
            scheduler,
            revealed: String::with_capacity(config.source.len()),
            source,
            post_delay: config.post_delay,
            policy: config.policy,
            phase: IntroPhase::Typing,
            tick_timer,
            reveal_timer,
            ticks: 0,
            torn_down: false,
        }
    }

    /// Dispatch every timer that is due, one firing at a time so that a timer
    /// cancelled by a handler never fires again. Does nothing after teardown.
    pub fn pump(&mut self) -> IntroEvent {
        if self.torn_down {
            return IntroEvent::Idle;
        }

        let mut typed = 0;
        let mut revealed = false;

        while let Some(id) = self.scheduler.poll_next() {
            if self.tick_timer == Some(id) {
                if self.on_tick() {
                    typed += 1;
                }
            } else if self.reveal_timer == Some(id) {
                self.on_reveal();
                revealed = true;
            }
        }

        if revealed {
            IntroEvent::Revealed
        } else if typed > 0 {
            IntroEvent::Typed(typed)
        } else {
            IntroEvent::Idle
        }
    }

    fn on_tick(&mut self) -> bool {
        if self.phase == IntroPhase::Revealed {
            return false;
        }
        let Some(&ch) = self.source.get(self.ticks) else {
            return false;
        };

        self.revealed.push(ch);
        self.ticks += 1;
        tracing::trace!(ticks = self.ticks, "intro tick");

        if self.ticks == self.source.len() {
            if let Some(id) = self.tick_timer.take() {
                self.scheduler.cancel(id);
            }
            if self.policy == CompletionPolicy::AfterLastTick {
                self.reveal_timer = Some(self.scheduler.schedule_once(self.post_delay));
            }
        }
        true
    }

    fn on_reveal(&mut self) {
        self.reveal_timer = None;
        if let Some(id) = self.tick_timer.take() {
            self.scheduler.cancel(id);
            tracing::warn!(
                typed = self.ticks,
                total = self.source.len(),
                "reveal fired before typing finished"
            );
        }
        self.phase = IntroPhase::Revealed;
        tracing::debug!("intro revealed");
    }

    /// Cancel both timers and freeze state. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let mut cancelled = 0;
        for id in [self.tick_timer.take(), self.reveal_timer.take()]
            .into_iter()
            .flatten()
        {
            if self.scheduler.cancel(id) {
                cancelled += 1;
            }
        }
        tracing::debug!(cancelled, "intro torn down");
    }

    pub fn revealed_text(&self) -> &str {
        &self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.phase == IntroPhase::Revealed
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Number of characters typed so far
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn is_typing_armed(&self) -> bool {
        self.tick_timer.is_some_and(|id| self.scheduler.is_armed(id))
    }

    pub fn is_reveal_armed(&self) -> bool {
        self.reveal_timer.is_some_and(|id| self.scheduler.is_armed(id))
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> Drop for IntroSequencer<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::ManualScheduler;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn config(source: &str, policy: CompletionPolicy) -> IntroConfig {
        IntroConfig {
            source: source.to_string(),
            char_delay: ms(40),
            post_delay: ms(500),
            policy,
        }
    }

    fn step<S: Scheduler>(intro: &mut IntroSequencer<S>) -> IntroEvent {
        intro.pump()
    }

    #[test]
    fn test_two_char_scenario() {
        let mut sched = ManualScheduler::new();
        let mut intro = IntroSequencer::start(&mut sched, config("AB", CompletionPolicy::FixedDelay));
        assert_eq!(intro.revealed_text(), "");

        intro.scheduler.advance(ms(40));
        assert_eq!(step(&mut intro), IntroEvent::Typed(1));
        assert_eq!(intro.revealed_text(), "A");
        assert!(intro.is_typing_armed());

        intro.scheduler.advance(ms(40));
        assert_eq!(step(&mut intro), IntroEvent::Typed(1));
        assert_eq!(intro.revealed_text(), "AB");
        assert!(!intro.is_typing_armed());
        assert!(!intro.is_complete());

        intro.scheduler.advance(ms(499));
        assert_eq!(step(&mut intro), IntroEvent::Idle);
        assert!(!intro.is_complete());

        intro.scheduler.advance(ms(1));
        assert_eq!(step(&mut intro), IntroEvent::Revealed);
        assert!(intro.is_complete());
        assert_eq!(intro.phase(), IntroPhase::Revealed);
    }

    #[test]
    fn test_every_prefix_is_observed_in_order() {
        let source = "$\n> Loading....";
        let mut sched = ManualScheduler::new();
        let mut intro = IntroSequencer::start(&mut sched, config(source, CompletionPolicy::FixedDelay));

        for k in 1..=source.chars().count() {
            intro.scheduler.advance(ms(40));
            intro.pump();
            let expected: String = source.chars().take(k).collect();
            assert_eq!(intro.revealed_text(), expected);
        }
    }

    #[test]
    fn test_ticks_never_exceed_source_length() {
        let mut sched = ManualScheduler::new();
        let mut intro = IntroSequencer::start(&mut sched, config("abc", CompletionPolicy::FixedDelay));

        intro.scheduler.advance(ms(10_000));
        assert_eq!(intro.pump(), IntroEvent::Revealed);
        assert_eq!(intro.ticks(), 3);
        assert_eq!(intro.revealed_text(), "abc");

        intro.scheduler.advance(ms(10_000));
        assert_eq!(intro.pump(), IntroEvent::Idle);
        assert_eq!(intro.ticks(), 3);
    }

    /// Records every firing handed out by the wrapped scheduler
    #[derive(Default)]
    struct RecordingScheduler {
        inner: ManualScheduler,
        fired: Vec<TimerId>,
    }

    impl Scheduler for RecordingScheduler {
        fn schedule_once(&mut self, delay: Duration) -> TimerId {
            self.inner.schedule_once(delay)
        }

        fn schedule_repeating(&mut self, period: Duration) -> TimerId {
            self.inner.schedule_repeating(period)
        }

        fn cancel(&mut self, id: TimerId) -> bool {
            self.inner.cancel(id)
        }

        fn is_armed(&self, id: TimerId) -> bool {
            self.inner.is_armed(id)
        }

        fn armed_count(&self) -> usize {
            self.inner.armed_count()
        }

        fn poll_next(&mut self) -> Option<TimerId> {
            let id = self.inner.poll_next()?;
            self.fired.push(id);
            Some(id)
        }
    }

    #[test]
    fn test_tick_timer_fires_at_most_source_length_after_stall() {
        let mut sched = RecordingScheduler::default();
        let mut intro = IntroSequencer::start(&mut sched, config("AB", CompletionPolicy::FixedDelay));
        let tick = intro.tick_timer.unwrap();

        intro.scheduler.inner.advance(ms(400));
        assert_eq!(intro.pump(), IntroEvent::Typed(2));
        assert_eq!(intro.revealed_text(), "AB");
        drop(intro);

        let tick_firings = sched.fired.iter().filter(|&&id| id == tick).count();
        assert_eq!(tick_firings, 2);
    }

    #[test]
    fn test_reveal_flips_exactly_once() {
        let mut sched = ManualScheduler::new();
        let mut intro = IntroSequencer::start(&mut sched, config("x", CompletionPolicy::FixedDelay));

        let mut reveals = 0;
        for _ in 0..50 {
            intro.scheduler.advance(ms(40));
            if intro.pump() == IntroEvent::Revealed {
                reveals += 1;
            }
        }
        assert_eq!(reveals, 1);
        assert!(intro.is_complete());
    }

    #[test]
    fn test_multibyte_source_reveals_whole_chars() {
        let mut sched = ManualScheduler::new();
        let mut intro = IntroSequencer::start(&mut sched, config("é→", CompletionPolicy::FixedDelay));

        intro.scheduler.advance(ms(40));
        intro.pump();
        assert_eq!(intro.revealed_text(), "é");
    }

    #[test]
    fn test_teardown_cancels_both_timers() {
        let mut sched = ManualScheduler::new();
        {
            let mut intro = IntroSequencer::start(&mut sched, config("AB", CompletionPolicy::FixedDelay));
            intro.scheduler.advance(ms(40));
            intro.pump();
            intro.teardown();

            intro.scheduler.advance(ms(10_000));
            assert_eq!(intro.pump(), IntroEvent::Idle);
            assert_eq!(intro.revealed_text(), "A");
            assert!(!intro.is_complete());
        }
        assert_eq!(sched.armed_count(), 0);
    }

    #[test]
    fn test_drop_releases_timers() {
        let mut sched = ManualScheduler::new();
        {
            let intro = IntroSequencer::start(&mut sched, config("hello", CompletionPolicy::FixedDelay));
            assert!(intro.is_typing_armed());
            assert!(intro.is_reveal_armed());
        }
        assert_eq!(sched.armed_count(), 0);
        sched.advance(ms(10_000));
        assert!(sched.poll_fired().is_empty());
    }

    #[test]
    fn test_empty_source_reveals_after_post_delay() {
        let mut sched = ManualScheduler::new();
        let mut intro = IntroSequencer::start(&mut sched, config("", CompletionPolicy::FixedDelay));
        assert!(!intro.is_typing_armed());

        intro.scheduler.advance(ms(500));
        assert_eq!(intro.pump(), IntroEvent::Revealed);
        assert_eq!(intro.revealed_text(), "");
    }

    #[test]
    fn test_after_last_tick_arms_reveal_late() {
        let mut sched = ManualScheduler::new();
        let mut intro = IntroSequencer::start(&mut sched, config("AB", CompletionPolicy::AfterLastTick));
        assert!(!intro.is_reveal_armed());

        intro.scheduler.advance(ms(80));
        assert_eq!(intro.pump(), IntroEvent::Typed(2));
        assert!(intro.is_reveal_armed());

        intro.scheduler.advance(ms(500));
        assert_eq!(intro.pump(), IntroEvent::Revealed);
        assert_eq!(intro.revealed_text(), "AB");
    }

    #[test]
    fn test_fixed_delay_with_short_post_delay_freezes_text() {
        // Reveal at 2*40+0 lands on the same instant as the last tick; the
        // tick was scheduled first so it still lands.
        let mut sched = ManualScheduler::new();
        let mut cfg = config("AB", CompletionPolicy::FixedDelay);
        cfg.post_delay = Duration::ZERO;
        let mut intro = IntroSequencer::start(&mut sched, cfg);

        intro.scheduler.advance(ms(80));
        assert_eq!(intro.pump(), IntroEvent::Revealed);
        assert_eq!(intro.revealed_text(), "AB");
    }

    #[test]
    fn test_reveal_delay_formula() {
        let cfg = config("$\n> Loading....", CompletionPolicy::FixedDelay);
        assert_eq!(cfg.reveal_delay(), ms(15 * 40 + 500));
    }

    #[test]
    fn test_default_config_uses_loading_banner() {
        let cfg = IntroConfig::default();
        assert_eq!(cfg.source, LOADING_TEXT);
        assert_eq!(cfg.char_delay, DEFAULT_CHAR_DELAY);
        assert_eq!(cfg.policy, CompletionPolicy::FixedDelay);
    }
}
