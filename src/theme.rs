//! Centralized theme constants for FactScope
//! All colors, sizes, and styling should reference these constants

use crate::view_model::Verdict;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background

pub const BG_BASE_LIGHT: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf5); // zinc-100
pub const BG_ELEVATED_LIGHT: Color32 = Color32::WHITE;
pub const BG_INPUT_LIGHT: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa); // zinc-50

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88); // teal-600, on light backgrounds

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500
pub const TEXT_PRIMARY_LIGHT: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_SUBTLE_LIGHT: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200

// =============================================================================
// COLORS - Status / Verdict
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

pub const FILL_RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // red-500
pub const FILL_GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500
pub const PROGRESS_TRACK: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const PROGRESS_TRACK_LIGHT: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_DEFAULT_LIGHT: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const BTN_ACCENT_TEXT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e); // teal-950
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BTN_DISABLED_TEXT: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 26.0;
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 760.0;
pub const BADGE_HEIGHT: f32 = 22.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;
pub const PROGRESS_HEIGHT: f32 = 10.0;
pub const INPUT_ROWS: usize = 8;

// =============================================================================
// CORNER RADIUS / STROKE / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Palette lookups that depend on dark/light mode
// =============================================================================
pub fn text_primary(dark: bool) -> Color32 {
    if dark {
        TEXT_PRIMARY
    } else {
        TEXT_PRIMARY_LIGHT
    }
}

pub fn text_muted(dark: bool) -> Color32 {
    if dark {
        TEXT_MUTED
    } else {
        TEXT_DIM
    }
}

pub fn accent(dark: bool) -> Color32 {
    if dark {
        ACCENT
    } else {
        ACCENT_DARK
    }
}

pub fn progress_track(dark: bool) -> Color32 {
    if dark {
        PROGRESS_TRACK
    } else {
        PROGRESS_TRACK_LIGHT
    }
}

/// Progress fill for a verdict (`fill-red` / `fill-green`)
pub fn verdict_fill(verdict: Verdict) -> Color32 {
    match verdict {
        Verdict::Fake => FILL_RED,
        Verdict::Real => FILL_GREEN,
    }
}

/// Returns (bg_color ~10% alpha, text_color) for a verdict badge
pub fn verdict_badge_colors(verdict: Verdict) -> (Color32, Color32) {
    let c = match verdict {
        Verdict::Fake => STATUS_ERROR,
        Verdict::Real => STATUS_SUCCESS,
    };
    (Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 26), c)
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, dark: bool) {
    if dark {
        ctx.set_theme(egui::Theme::Dark);
        ctx.set_visuals(egui::Visuals {
            dark_mode: true,
            panel_fill: BG_BASE,
            window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
            extreme_bg_color: BG_INPUT,
            faint_bg_color: BG_ELEVATED,
            hyperlink_color: ACCENT,
            selection: egui::style::Selection {
                bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
                stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
            },
            window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
            window_corner_radius: egui::CornerRadius::same(8),
            interact_cursor: Some(egui::CursorIcon::PointingHand),
            ..egui::Visuals::dark()
        });
    } else {
        ctx.set_theme(egui::Theme::Light);
        ctx.set_visuals(egui::Visuals {
            dark_mode: false,
            panel_fill: BG_BASE_LIGHT,
            window_fill: BG_ELEVATED_LIGHT,
            extreme_bg_color: BG_INPUT_LIGHT,
            faint_bg_color: BG_ELEVATED_LIGHT,
            hyperlink_color: ACCENT_DARK,
            selection: egui::style::Selection {
                bg_fill: Color32::from_rgb(0xcc, 0xfb, 0xf1), // teal-100
                stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT_DARK),
            },
            window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE_LIGHT),
            window_corner_radius: egui::CornerRadius::same(8),
            interact_cursor: Some(egui::CursorIcon::PointingHand),
            ..egui::Visuals::light()
        });
    }

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(dark: bool) -> egui::Frame {
    let (fill, stroke) = if dark {
        (
            Color32::from_rgba_unmultiplied(0x18, 0x18, 0x1b, 150),
            BORDER_SUBTLE,
        )
    } else {
        (BG_ELEVATED_LIGHT, BORDER_SUBTLE_LIGHT)
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, stroke))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn toast_frame(alpha: f32) -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x1e, (230.0 * alpha) as u8))
        .stroke(egui::Stroke::new(
            STROKE_DEFAULT,
            Color32::from_rgba_unmultiplied(ACCENT.r(), ACCENT.g(), ACCENT.b(), (100.0 * alpha) as u8),
        ))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>, dark: bool) -> egui::Button<'static> {
    let fill = if dark { BTN_DEFAULT } else { BTN_DEFAULT_LIGHT };
    egui::Button::new(egui::RichText::new(text.into()).color(text_primary(dark)))
        .fill(fill)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Accent teal button (primary action). Grays out while disabled.
pub fn button_accent(text: impl Into<String>, enabled: bool) -> egui::Button<'static> {
    let (fill, color) = if enabled {
        (BTN_ACCENT, BTN_ACCENT_TEXT)
    } else {
        (BTN_DISABLED, BTN_DISABLED_TEXT)
    };
    egui::Button::new(egui::RichText::new(text.into()).color(color).size(FONT_BODY))
        .fill(fill)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT_LARGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_colors_are_distinct() {
        assert_eq!(verdict_fill(Verdict::Fake), FILL_RED);
        assert_eq!(verdict_fill(Verdict::Real), FILL_GREEN);
        assert_ne!(
            verdict_badge_colors(Verdict::Fake).1,
            verdict_badge_colors(Verdict::Real).1
        );
    }
}
