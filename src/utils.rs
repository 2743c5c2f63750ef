//! Utility functions

use crate::constants::APP_NAME;
use chrono::{DateTime, NaiveDate};
use std::path::PathBuf;

// Square viewBox, used for the window/taskbar icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="2" width="60" height="60" rx="14" fill="#18181b"/><circle cx="28" cy="28" r="14" fill="none" stroke="#2dd4bf" stroke-width="5"/><path d="M38.5 38.5 L52 52" stroke="#2dd4bf" stroke-width="6" stroke-linecap="round"/><path d="M21 28.5 l5 5 l9 -10" fill="none" stroke="#fff" stroke-width="3.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image. `None` if the SVG or pixmap can't be built.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory (settings.json, logs/)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format an article/analysis date as M/D/YYYY.
/// Accepts RFC 3339, naive ISO timestamps and plain YYYY-MM-DD.
pub fn format_published_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => "Unknown date".to_string(),
    }
}

/// Trim and count characters the way the input validation does
pub fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}
