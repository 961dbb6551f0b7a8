//! Panel swap animation.
//!
//! Purely presentational: the active section has already changed by the time
//! a transition exists. The outgoing panel plays its exit motion first, then
//! the incoming panel plays its enter motion.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::models::{MotionKind, Section};

/// Pixel-to-cell scale for slide offsets
const PX_PER_COL: f32 = 8.0;
const PX_PER_ROW: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Exit,
    Enter,
}

/// How to draw the panel at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    pub section: Section,
    pub phase: TransitionPhase,
    /// 0.0 fully transparent, 1.0 fully drawn
    pub opacity: f32,
    pub offset_x: i16,
    pub offset_y: i16,
    /// Fraction of width/height trimmed from each side
    pub inset_x: f32,
    pub inset_y: f32,
}

impl PanelFrame {
    /// A panel at rest
    pub fn settled(section: Section) -> Self {
        Self {
            section,
            phase: TransitionPhase::Enter,
            opacity: 1.0,
            offset_x: 0,
            offset_y: 0,
            inset_x: 0.0,
            inset_y: 0.0,
        }
    }

    /// Geometry of the panel inside `area`, clipped to it
    pub fn apply(&self, area: Rect) -> Rect {
        let trim_x = (f32::from(area.width) * self.inset_x).round() as u16;
        let trim_y = (f32::from(area.height) * self.inset_y).round() as u16;
        let width = area.width.saturating_sub(trim_x * 2);
        let height = area.height.saturating_sub(trim_y * 2);

        let x = i32::from(area.x) + i32::from(trim_x) + i32::from(self.offset_x);
        let y = i32::from(area.y) + i32::from(trim_y) + i32::from(self.offset_y);

        let min_x = i32::from(area.x);
        let min_y = i32::from(area.y);
        let max_x = i32::from(area.x) + i32::from(area.width);
        let max_y = i32::from(area.y) + i32::from(area.height);

        let left = x.clamp(min_x, max_x);
        let top = y.clamp(min_y, max_y);
        let right = (x + i32::from(width)).clamp(min_x, max_x);
        let bottom = (y + i32::from(height)).clamp(min_y, max_y);

        Rect::new(
            left as u16,
            top as u16,
            (right - left).max(0) as u16,
            (bottom - top).max(0) as u16,
        )
    }
}

/// Running swap from one panel to another
#[derive(Debug, Clone)]
pub struct PanelTransition {
    from: Section,
    to: Section,
    started: Instant,
}

impl PanelTransition {
    /// None when nothing would change on screen
    pub fn new(from: Section, to: Section, started: Instant) -> Option<Self> {
        (from != to).then_some(Self { from, to, started })
    }

    /// Start a new swap from whatever is on screen at `now`, picking up at
    /// the visible panel's current opacity instead of snapping it back.
    pub fn retarget(&self, to: Section, now: Instant) -> Self {
        let frame = self.frame_at(now);
        let shown = frame.section;

        // Time already spent, in the new swap, to reach this opacity
        let lead = if shown == to {
            let enter = to.motion().duration;
            shown.motion().duration + enter.mul_f32(ease_out_inverse(frame.opacity))
        } else {
            shown.motion().duration.mul_f32(ease_out_inverse(1.0 - frame.opacity))
        };

        Self {
            from: shown,
            to,
            started: now.checked_sub(lead).unwrap_or(now),
        }
    }

    pub fn target(&self) -> Section {
        self.to
    }

    fn exit_duration(&self) -> Duration {
        self.from.motion().duration
    }

    pub fn total_duration(&self) -> Duration {
        self.exit_duration() + self.to.motion().duration
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.total_duration()
    }

    pub fn frame_at(&self, now: Instant) -> PanelFrame {
        let elapsed = now.saturating_duration_since(self.started);
        let exit = self.exit_duration();

        if elapsed < exit {
            let t = ease_out(ratio(elapsed, exit));
            motion_frame(self.from, TransitionPhase::Exit, t)
        } else {
            let enter = self.to.motion().duration;
            let t = ease_out(ratio(elapsed - exit, enter));
            motion_frame(self.to, TransitionPhase::Enter, 1.0 - t)
        }
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Progress at which `ease_out` reaches `y`
fn ease_out_inverse(y: f32) -> f32 {
    1.0 - (1.0 - y.clamp(0.0, 1.0)).cbrt()
}

/// `amount` is 0.0 at rest and 1.0 at the fully hidden end of the motion
fn motion_frame(section: Section, phase: TransitionPhase, amount: f32) -> PanelFrame {
    let mut frame = PanelFrame::settled(section);
    frame.phase = phase;
    frame.opacity = 1.0 - amount;

    match section.motion().kind {
        MotionKind::Scale { from } => {
            let shrink = (1.0 - from) * amount;
            frame.inset_x = shrink / 2.0;
            frame.inset_y = shrink / 2.0;
        }
        MotionKind::SlideX { enter, exit } => {
            let px = if phase == TransitionPhase::Exit { exit } else { enter };
            frame.offset_x = (f32::from(px) * amount / PX_PER_COL).round() as i16;
        }
        MotionKind::SlideY { enter, exit } => {
            let px = if phase == TransitionPhase::Exit { exit } else { enter };
            frame.offset_y = (f32::from(px) * amount / PX_PER_ROW).round() as i16;
        }
        MotionKind::Tilt { degrees } => {
            frame.inset_y = f32::from(degrees) / 90.0 * amount / 2.0;
        }
    }
    frame
}
