//! Data models for the portfolio
//!
//! This module contains the core data structures:
//! - Profile content loaded from profile.json
//! - Enums for the screen and section state machines

pub mod enums;
pub mod profile;

// Re-exports for convenient access
pub use enums::{MotionKind, Screen, Section};
pub use profile::{find_profile, Profile, ProfileSource};
