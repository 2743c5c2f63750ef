//! App module - contains the main application state and logic

mod analyze;
mod share;
mod state;
mod toast;
mod views;

use crate::api::ApiClient;
use crate::error::Result;
use crate::settings::Settings;
use crate::theme;
use crate::types::{HealthStatus, SourceCatalog, VerificationResult};
use crate::utils;
use eframe::egui;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use share::SystemClipboard;
use state::UiState;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) state: UiState,
    pub(crate) client: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Background tasks, polled every frame
    pub(crate) pending_health: Option<JoinHandle<Result<HealthStatus>>>,
    pub(crate) pending_catalog: Option<JoinHandle<Result<SourceCatalog>>>,
    pub(crate) pending_analysis: Option<JoinHandle<Result<VerificationResult>>>,
    pub(crate) logo: Option<egui::TextureHandle>,
    pub(crate) clipboard: SystemClipboard,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        client: ApiClient,
        runtime: tokio::runtime::Runtime,
        data_dir: PathBuf,
    ) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx, settings.dark_mode);

        let logo = utils::rasterize_icon(64).map(|(pixels, w, h)| {
            cc.egui_ctx.load_texture(
                "logo",
                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                egui::TextureOptions::LINEAR,
            )
        });

        let mut app = Self {
            state: UiState::new(settings.dark_mode),
            client,
            runtime,
            pending_health: None,
            pending_catalog: None,
            pending_analysis: None,
            logo,
            clipboard: SystemClipboard::default(),
            central_panel_rect: None,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };

        app.initialize(&cc.egui_ctx);
        app
    }

    /// Show the home page and probe the backend; the result only affects messaging.
    fn initialize(&mut self, ctx: &egui::Context) {
        self.state.go_back();
        info!(base_url = %self.client.base_url(), "Probing backend");

        let client = self.client.clone();
        let ctx = ctx.clone();
        self.pending_health = Some(self.runtime.spawn(async move {
            let outcome = client.check_health().await;
            ctx.request_repaint();
            outcome
        }));
    }

    fn fetch_catalog(&mut self, ctx: &egui::Context) {
        let client = self.client.clone();
        let ctx = ctx.clone();
        self.pending_catalog = Some(self.runtime.spawn(async move {
            let outcome = client.source_catalog().await;
            ctx.request_repaint();
            outcome
        }));
    }

    /// Apply finished background tasks to the UI state
    pub fn poll_tasks(&mut self, ctx: &egui::Context) {
        if let Some(handle) = self.pending_health.take_if(|h| h.is_finished()) {
            let outcome = self.runtime.block_on(handle).unwrap_or_else(|e| {
                error!(error = %e, "Health check task did not complete");
                Err(crate::error::AppError::BackendUnreachable(e.to_string()))
            });
            let online = outcome.is_ok();
            self.state.record_startup_health(outcome);
            if online {
                self.fetch_catalog(ctx);
            }
        }

        if let Some(handle) = self.pending_catalog.take_if(|h| h.is_finished()) {
            match self.runtime.block_on(handle) {
                Ok(Ok(catalog)) => {
                    info!(
                        trusted = catalog.trusted_sources.len(),
                        suspicious = catalog.suspicious_sources.len(),
                        "Source catalog loaded"
                    );
                    self.state.catalog = Some(catalog);
                }
                Ok(Err(e)) => warn!(error = %e, "Source catalog unavailable"),
                Err(e) => error!(error = %e, "Source catalog task did not complete"),
            }
        }

        self.poll_analysis(ctx);
    }

    pub fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        let dark = self.state.toggle_dark_mode();
        theme::apply_visuals(ctx, dark);
        info!(dark, "Theme switched");
        self.save_settings();
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x).or(self.settings.window_x),
            window_y: self.window_pos.map(|p| p.y).or(self.settings.window_y),
            window_w: self.window_size.map(|s| s.x).or(self.settings.window_w),
            window_h: self.window_size.map(|s| s.y).or(self.settings.window_h),
            dark_mode: self.state.dark_mode,
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
