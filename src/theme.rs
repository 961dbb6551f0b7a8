//! Theme module for folio-tui
//!
//! This module provides a centralized color palette and styling constants:
//! a green-on-black console for the intro and a pale blue page for the
//! portfolio itself.

use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Intro Console
// ============================================================================

/// Console background (#000000)
pub const CONSOLE_BG: Color = Color::Rgb(0, 0, 0);

/// Console text (#4ade80)
pub const CONSOLE_GREEN: Color = Color::Rgb(74, 222, 128);

/// Full blink period of the console cursor
pub const CURSOR_BLINK: Duration = Duration::from_millis(1000);

// ============================================================================
// Page Colors
// ============================================================================

/// Page background - pale blue (#e6f2ff)
pub const PAGE_BG: Color = Color::Rgb(230, 242, 255);

/// Card background (#ffffff)
pub const CARD_BG: Color = Color::Rgb(255, 255, 255);

/// Subtle divider and card border (#dfe6ea)
pub const BORDER_SUBTLE: Color = Color::Rgb(223, 230, 234);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary accent - section headings and resume button (#005f99)
pub const ACCENT: Color = Color::Rgb(0, 95, 153);

/// Secondary button background (#bfe6ff)
pub const ACCENT_SOFT: Color = Color::Rgb(191, 230, 255);

/// Secondary button text (#003a63)
pub const ACCENT_DEEP: Color = Color::Rgb(0, 58, 99);

/// Active tab background (#9ec7ff)
pub const TAB_ACTIVE_BG: Color = Color::Rgb(158, 199, 255);

/// Status bar background for failures (#b91c1c)
pub const STATUS_ERROR: Color = Color::Rgb(185, 28, 28);

// ============================================================================
// Text Colors
// ============================================================================

/// Name heading (#032b4a)
pub const TEXT_TITLE: Color = Color::Rgb(3, 43, 74);

/// Headline under the name (#084b6a)
pub const TEXT_HEADLINE: Color = Color::Rgb(8, 75, 106);

/// Body text (#01283a)
pub const TEXT_PRIMARY: Color = Color::Rgb(1, 40, 58);

/// About paragraph (#063243)
pub const TEXT_ABOUT: Color = Color::Rgb(6, 50, 67);

/// Secondary card lines such as dates (#4b5563)
pub const TEXT_MUTED: Color = Color::Rgb(75, 85, 99);

/// Footer text (#034a6b)
pub const TEXT_FOOTER: Color = Color::Rgb(3, 74, 107);

// ============================================================================
// Borders and Animation
// ============================================================================

/// Rounded corners for cards and badges
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Cursor is shown during the first half of each blink period
pub fn cursor_visible(elapsed: Duration) -> bool {
    let period = CURSOR_BLINK.as_millis();
    elapsed.as_millis() % period < period / 2
}

/// Blend `color` toward `background` as opacity falls. RGB colors only;
/// anything else is returned untouched.
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, background) else {
        return color;
    };
    let opacity = opacity.clamp(0.0, 1.0);
    let mix = |c: u8, base: u8| -> u8 {
        (f32::from(base) + (f32::from(c) - f32::from(base)) * opacity).round() as u8
    };
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}
