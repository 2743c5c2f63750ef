//! Page rendering: header, footer, home and result pages, toast overlay

use super::analyze::enter_submits;
use super::App;
use crate::constants::{APP_NAME, MIN_INPUT_CHARS};
use crate::theme;
use crate::types::Page;
use crate::ui::components::{
    confidence_bar, format_probability, section_heading, stat_row, status_indicator, verdict_badge,
};
use crate::utils::char_len;
use crate::view_model::{MlBreakdown, ResultView, SourcesBlock};
use chrono::Datelike;
use eframe::egui;
use egui_phosphor::regular as icons;
use std::time::Instant;
use tracing::{debug, warn};

const INPUT_ID: &str = "news_input";

/// Clicks on the result page, applied once the view is no longer borrowed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultAction {
    Back,
    Share,
    AnalyzeAnother,
}

impl App {
    // ========================================================================
    // CHROME (header, footer, central panel)
    // ========================================================================

    pub fn render_header(&mut self, ctx: &egui::Context) {
        let dark = self.state.dark_mode;
        let mut toggle = false;

        egui::TopBottomPanel::top("header")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(texture) = &self.logo {
                        ui.image(egui::load::SizedTexture::new(
                            texture.id(),
                            egui::vec2(24.0, 24.0),
                        ));
                    }
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(APP_NAME)
                                .size(theme::FONT_TITLE)
                                .strong()
                                .color(theme::text_primary(dark)),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let tooltip = if dark {
                            "Switch to light mode"
                        } else {
                            "Switch to dark mode"
                        };
                        if ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new(self.state.dark_toggle_icon())
                                        .size(theme::FONT_HEADING),
                                )
                                .frame(false),
                            )
                            .on_hover_text(tooltip)
                            .clicked()
                        {
                            toggle = true;
                        }
                        ui.add_space(theme::SPACING_MD);
                        status_indicator(ui, &self.state.backend, dark);
                    });
                });
            });

        if toggle {
            self.toggle_dark_mode(ctx);
        }
    }

    pub fn render_footer(&self, ctx: &egui::Context) {
        let dark = self.state.dark_mode;
        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "© {} {} AI",
                                chrono::Local::now().year(),
                                APP_NAME
                            ))
                            .size(theme::FONT_SMALL)
                            .color(theme::text_muted(dark)),
                        )
                        .selectable(false),
                    );
                });
            });
    }

    /// Central panel (MUST be added LAST after the header and footer panels)
    pub fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
                        let side = (ui.available_width() - width) / 2.0;
                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                match self.state.page {
                                    Page::Home => self.render_home_page(ui, ctx),
                                    Page::Result => self.render_result_page(ui),
                                }
                            });
                        });
                    });
            });
    }

    // ========================================================================
    // HOME PAGE
    // ========================================================================

    fn render_home_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let dark = self.state.dark_mode;

        ui.add_space(theme::SPACING_XL);
        ui.label(
            egui::RichText::new("Is this news real?")
                .size(theme::FONT_DISPLAY)
                .strong()
                .color(theme::text_primary(dark)),
        );
        ui.label(
            egui::RichText::new(
                "Paste a headline or article. FactScope checks the wording against known sources and fact-checks.",
            )
            .size(theme::FONT_BODY)
            .color(theme::text_muted(dark)),
        );
        ui.add_space(theme::SPACING_LG);

        // Enter submits. Shift+Enter reaches the editor as a newline.
        let input_id = egui::Id::new(INPUT_ID);
        let focused = ctx.memory(|mem| mem.has_focus(input_id));
        let (shift, enter) =
            ctx.input(|i| (i.modifiers.shift, i.key_pressed(egui::Key::Enter)));
        let submit = enter_submits(focused, shift, enter);
        if submit {
            ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));
        }

        theme::card_frame(dark).show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::multiline(&mut self.state.input)
                    .id(input_id)
                    .hint_text("Paste news headline or article text here...")
                    .desired_rows(theme::INPUT_ROWS)
                    .desired_width(f32::INFINITY)
                    .frame(false),
            );
            if self.state.focus_input {
                self.state.focus_input = false;
                response.request_focus();
            }

            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                let count = char_len(&self.state.input);
                let color = if count > 0 && count < MIN_INPUT_CHARS {
                    theme::STATUS_WARNING
                } else {
                    theme::text_muted(dark)
                };
                ui.label(
                    egui::RichText::new(format!("{} characters", count))
                        .size(theme::FONT_SMALL)
                        .color(color),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Enter to analyze, Shift+Enter for a new line")
                            .size(theme::FONT_SMALL)
                            .color(theme::text_muted(dark)),
                    );
                });
            });
        });
        ui.add_space(theme::SPACING_LG);

        let loading = self.state.loading;
        let (icon, text) = self.state.analyze_button();
        let clicked = ui
            .horizontal(|ui| {
                let clicked = ui
                    .add_enabled(
                        !loading,
                        theme::button_accent(format!("{}  {}", icon, text), !loading),
                    )
                    .clicked();
                if loading {
                    ui.add(egui::Spinner::new().color(theme::accent(dark)));
                }
                clicked
            })
            .inner;

        if clicked || submit {
            self.start_analysis(ctx);
        }

        self.render_source_catalog(ui);
    }

    fn render_source_catalog(&self, ui: &mut egui::Ui) {
        let Some(catalog) = &self.state.catalog else {
            return;
        };
        let dark = self.state.dark_mode;
        let list = |domains: &[String]| {
            if domains.is_empty() {
                "none".to_string()
            } else {
                domains.join(", ")
            }
        };

        ui.add_space(theme::SPACING_XL);
        egui::CollapsingHeader::new(
            egui::RichText::new(format!("{}  Known sources", icons::BOOKS))
                .size(theme::FONT_LABEL)
                .color(theme::text_muted(dark)),
        )
        .id_salt("source_catalog")
        .default_open(false)
        .show(ui, |ui| {
            stat_row(ui, "Trusted", &list(&catalog.trusted_sources), dark);
            stat_row(ui, "Suspicious", &list(&catalog.suspicious_sources), dark);
        });
    }

    // ========================================================================
    // RESULT PAGE
    // ========================================================================

    fn render_result_page(&mut self, ui: &mut egui::Ui) {
        let dark = self.state.dark_mode;
        let Some(view) = self.state.result.as_ref() else {
            self.state.go_back();
            return;
        };

        match render_result(ui, view, dark) {
            Some(ResultAction::Back) => self.state.go_back(),
            Some(ResultAction::Share) => self.share_current_result(),
            Some(ResultAction::AnalyzeAnother) => self.state.analyze_another(),
            None => {}
        }
    }

    // ========================================================================
    // TOAST
    // ========================================================================

    /// Bottom-right of the central panel. Hover pauses the timer.
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let Some(panel_rect) = self.central_panel_rect else {
            return;
        };
        let Some(toast) = self.state.toast.current().cloned() else {
            return;
        };

        let alpha = toast.alpha(now);
        let margin = 12.0;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let text_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8);

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                theme::toast_frame(alpha).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(toast.icon.glyph()).color(text_color));
                        ui.label(egui::RichText::new(&toast.message).color(text_color));
                    });
                });
            });

        if response.response.hovered() {
            self.state.toast.hold(now);
        }
        if self.state.toast.tick(now) {
            ctx.request_repaint();
        }
    }
}

fn render_result(ui: &mut egui::Ui, view: &ResultView, dark: bool) -> Option<ResultAction> {
    ui.add_space(theme::SPACING_XL);

    theme::card_frame(dark).show(ui, |ui| {
        ui.set_width(ui.available_width());
        let (_, verdict_color) = theme::verdict_badge_colors(view.verdict);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(view.verdict.icon())
                    .size(theme::FONT_DISPLAY)
                    .color(verdict_color),
            );
            ui.label(
                egui::RichText::new(&view.label)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(verdict_color),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                verdict_badge(ui, view.verdict);
            });
        });
        ui.add_space(theme::SPACING_MD);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Confidence")
                    .size(theme::FONT_LABEL)
                    .color(theme::text_muted(dark)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&view.confidence_text)
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(theme::text_primary(dark)),
                );
            });
        });
        confidence_bar(ui, view.confidence, view.verdict, dark);
        if !view.confidence.in_range() {
            ui.label(
                egui::RichText::new("Reported confidence is outside 0-100%")
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_WARNING),
            );
        }

        if !view.explanation.is_empty() {
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(&view.explanation)
                    .size(theme::FONT_BODY)
                    .color(theme::text_primary(dark)),
            );
        }
        if view.contradictory_count > 0 {
            ui.add_space(theme::SPACING_SM);
            let noun = if view.contradictory_count == 1 {
                "source"
            } else {
                "sources"
            };
            ui.label(
                egui::RichText::new(format!(
                    "{}  {} contradicting {} found",
                    icons::WARNING,
                    view.contradictory_count,
                    noun
                ))
                .size(theme::FONT_LABEL)
                .color(theme::STATUS_WARNING),
            );
        }
        if let Some(at) = &view.analyzed_at {
            stat_row(ui, "Analyzed", at, dark);
        }
    });
    ui.add_space(theme::SPACING_LG);

    theme::card_frame(dark).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, icons::NEWSPAPER, "Analyzed Text", dark);
        ui.label(
            egui::RichText::new(&view.preview)
                .italics()
                .size(theme::FONT_BODY)
                .color(theme::text_muted(dark)),
        );
    });
    ui.add_space(theme::SPACING_LG);

    theme::card_frame(dark).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, icons::CHART_BAR, "Sentiment Analysis", dark);
        stat_row(ui, "Sentiment", &view.sentiment, dark);
        ui.label(
            egui::RichText::new(&view.sentiment_details)
                .size(theme::FONT_BODY)
                .color(theme::text_primary(dark)),
        );
        stat_row(ui, "Keywords", &view.keywords, dark);
        stat_row(ui, "Score", &view.sentiment_score, dark);
        if let Some(score) = &view.sensational_score {
            stat_row(ui, "Sensational score", score, dark);
        }
        if let Some(score) = &view.factual_score {
            stat_row(ui, "Factual score", score, dark);
        }
    });

    if let Some(ml) = &view.ml {
        ui.add_space(theme::SPACING_LG);
        render_ml(ui, ml, dark);
    }

    if let Some(sources) = &view.sources {
        ui.add_space(theme::SPACING_LG);
        render_sources(ui, sources, dark);
    }

    ui.add_space(theme::SPACING_LG);
    ui.horizontal(|ui| {
        let mut action = None;
        if ui
            .add(theme::button(format!("{}  Back", icons::ARROW_LEFT), dark))
            .clicked()
        {
            action = Some(ResultAction::Back);
        }
        if ui
            .add(theme::button(format!("{}  Share", icons::SHARE_NETWORK), dark))
            .clicked()
        {
            action = Some(ResultAction::Share);
        }
        if ui
            .add(theme::button_accent(
                format!("{}  Analyze Another", icons::ARROW_COUNTER_CLOCKWISE),
                true,
            ))
            .clicked()
        {
            action = Some(ResultAction::AnalyzeAnother);
        }
        action
    })
    .inner
}

fn render_ml(ui: &mut egui::Ui, ml: &MlBreakdown, dark: bool) {
    theme::card_frame(dark).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, icons::BRAIN, "Model Prediction", dark);
        stat_row(ui, "Verdict", ml.verdict.badge(), dark);
        stat_row(ui, "Confidence", &ml.confidence.text(), dark);
        stat_row(ui, "Fake probability", &format_probability(ml.fake_probability), dark);
        stat_row(ui, "Real probability", &format_probability(ml.real_probability), dark);
    });
}

fn render_sources(ui: &mut egui::Ui, sources: &SourcesBlock, dark: bool) {
    theme::card_frame(dark).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_heading(ui, icons::SEAL_CHECK, "Source Verification", dark);

        if !sources.trusted.is_empty() {
            ui.label(
                egui::RichText::new("Trusted sources")
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(theme::text_muted(dark)),
            );
            for line in &sources.trusted {
                ui.horizontal_wrapped(|ui| {
                    match &line.url {
                        Some(url) => {
                            if ui
                                .link(egui::RichText::new(&line.title).size(theme::FONT_BODY))
                                .on_hover_text(url)
                                .clicked()
                            {
                                open_link(url);
                            }
                        }
                        None => {
                            ui.label(
                                egui::RichText::new(&line.title)
                                    .size(theme::FONT_BODY)
                                    .color(theme::text_primary(dark)),
                            );
                        }
                    }
                    let meta = if line.source.is_empty() {
                        line.published.clone()
                    } else {
                        format!("{} · {}", line.source, line.published)
                    };
                    ui.label(
                        egui::RichText::new(meta)
                            .size(theme::FONT_SMALL)
                            .color(theme::text_muted(dark)),
                    );
                });
            }
        }

        if !sources.fact_checks.is_empty() {
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new("Fact checks")
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(theme::text_muted(dark)),
            );
            for check in &sources.fact_checks {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(&check.rating)
                            .size(theme::FONT_BODY)
                            .strong()
                            .color(theme::STATUS_WARNING),
                    );
                    ui.label(
                        egui::RichText::new(&check.text)
                            .size(theme::FONT_BODY)
                            .color(theme::text_primary(dark)),
                    );
                });
                let mut meta = format!("Publisher: {}", check.publisher);
                if let Some(claimant) = &check.claimant {
                    meta.push_str(&format!(" · Claimed by {}", claimant));
                }
                ui.label(
                    egui::RichText::new(meta)
                        .size(theme::FONT_SMALL)
                        .color(theme::text_muted(dark)),
                );
            }
        }
    });
}

fn open_link(url: &str) {
    debug!(url = %url, "Opening source link");
    if let Err(e) = open::that_detached(url) {
        warn!(error = %e, url = %url, "Failed to open link");
    }
}
