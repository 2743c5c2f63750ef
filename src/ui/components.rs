//! Reusable UI components
//!
//! Small painter-based widgets shared by the home and result pages.

use crate::theme;
use crate::types::BackendStatus;
use crate::view_model::{Confidence, Verdict};
use eframe::egui;

/// FAKE / REAL pill badge
pub fn verdict_badge(ui: &mut egui::Ui, verdict: Verdict) -> egui::Response {
    let (bg, fg) = theme::verdict_badge_colors(verdict);
    let galley = ui.painter().layout_no_wrap(
        verdict.badge().to_string(),
        egui::FontId::proportional(theme::FONT_SMALL),
        fg,
    );
    let size = egui::vec2(galley.size().x + theme::SPACING_XL, theme::BADGE_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::BADGE_HEIGHT / 2.0, bg);
        painter.rect_stroke(
            rect,
            theme::BADGE_HEIGHT / 2.0,
            egui::Stroke::new(theme::STROKE_DEFAULT, fg),
            egui::StrokeKind::Inside,
        );
        painter.galley(rect.center() - galley.size() / 2.0, galley, fg);
    }

    response
}

/// Horizontal confidence bar. Width follows the (clamped) fraction, color the verdict.
pub fn confidence_bar(ui: &mut egui::Ui, confidence: Confidence, verdict: Verdict, dark: bool) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, theme::PROGRESS_HEIGHT),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }

    let radius = theme::PROGRESS_HEIGHT / 2.0;
    let painter = ui.painter();
    painter.rect_filled(rect, radius, theme::progress_track(dark));

    let fill_width = rect.width() * confidence.bar_fraction();
    if fill_width > 0.0 {
        let fill_rect = egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
        painter.rect_filled(fill_rect, radius, theme::verdict_fill(verdict));
    }
}

/// Card heading with a leading icon
pub fn section_heading(ui: &mut egui::Ui, icon: &str, title: &str, dark: bool) {
    ui.label(
        egui::RichText::new(format!("{}  {}", icon, title))
            .size(theme::FONT_HEADING)
            .strong()
            .color(theme::text_primary(dark)),
    );
    ui.add_space(theme::SPACING_SM);
}

/// "Label: value" row with a muted label
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: &str, dark: bool) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .size(theme::FONT_LABEL)
                .color(theme::text_muted(dark)),
        );
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_BODY)
                .color(theme::text_primary(dark)),
        );
    });
}

/// Colored dot plus status text. Added label-first, so call it from a right-to-left layout.
pub fn status_indicator(ui: &mut egui::Ui, status: &BackendStatus, dark: bool) {
    let color = match status {
        BackendStatus::Checking => theme::text_muted(dark),
        BackendStatus::Online {
            model_loaded: Some(false),
        } => theme::STATUS_WARNING,
        BackendStatus::Online { .. } => theme::STATUS_SUCCESS,
        BackendStatus::Offline => theme::STATUS_ERROR,
    };
    ui.add(
        egui::Label::new(
            egui::RichText::new(status.label())
                .size(theme::FONT_SMALL)
                .color(theme::text_muted(dark)),
        )
        .selectable(false),
    );
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, color);
}

/// Probability as shown in the ML breakdown ("61.2%" or "n/a")
pub fn format_probability(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => "n/a".to_string(),
    }
}
