//! Appearance of the per-window badge.

use crate::model::label::Label;
use crate::sys::geometry::Size;

/// One pixel of border around the badge.
pub const BORDER_WIDTH: i32 = 1;

/// Used when no toolkit is around to measure text.
const GLYPH_ADVANCE: i32 = 10;
const LINE_HEIGHT: i32 = 20;
const ICON_SIZE: i32 = 16;

pub fn badge_text(label: Label, title: &str) -> String { format!(" {label}: {title}") }

/// Approximates what the toolkit would render for `text`, with or without
/// an icon in front of it.
pub fn estimate_size(text: &str, has_icon: bool) -> Size {
    let glyphs = i32::try_from(text.chars().count()).unwrap_or(i32::MAX / GLYPH_ADVANCE);
    let icon_width = if has_icon { ICON_SIZE } else { 0 };
    Size::new(
        2 * BORDER_WIDTH + icon_width + glyphs.saturating_mul(GLYPH_ADVANCE),
        2 * BORDER_WIDTH + LINE_HEIGHT.max(if has_icon { ICON_SIZE } else { 0 }),
    )
}
