//! Intro sequence shown before the portfolio.
//!
//! - `scheduler`: injectable timer capability (wall clock and manual time)
//! - `sequencer`: the typewriter state machine driven by those timers

mod scheduler;
mod sequencer;

pub use scheduler::{ManualScheduler, Scheduler, SystemScheduler, TimerId};
pub use sequencer::{
    CompletionPolicy, IntroConfig, IntroEvent, IntroPhase, IntroSequencer, DEFAULT_CHAR_DELAY,
    DEFAULT_POST_DELAY, LOADING_TEXT,
};
