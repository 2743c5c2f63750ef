//! Toast notification slot
//!
//! One toast at a time. Showing a new toast replaces the old one and restarts
//! the timer, so an older toast's deadline never hides a newer message.

use crate::constants::TOAST_DEFAULT_MS;
use std::time::{Duration, Instant};

/// Fade-out tail appended to every toast's visible duration
pub const FADE: Duration = Duration::from_millis(400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastIcon {
    Info,
    Check,
    Warning,
    Clipboard,
}

impl ToastIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ToastIcon::Info => egui_phosphor::regular::INFO,
            ToastIcon::Check => egui_phosphor::regular::CHECK_CIRCLE,
            ToastIcon::Warning => egui_phosphor::regular::WARNING,
            ToastIcon::Clipboard => egui_phosphor::regular::CLIPBOARD_TEXT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub icon: ToastIcon,
    pub duration: Duration,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, icon: ToastIcon, duration: Duration, now: Instant) -> Self {
        Self {
            message: message.into(),
            icon,
            duration,
            shown_at: now,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.shown_at)
    }

    /// 1.0 while visible, falling to 0.0 across the fade tail
    pub fn alpha(&self, now: Instant) -> f32 {
        let elapsed = self.elapsed(now);
        if elapsed <= self.duration {
            1.0
        } else {
            let into_fade = (elapsed - self.duration).as_secs_f32();
            (1.0 - into_fade / FADE.as_secs_f32()).max(0.0)
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration + FADE
    }
}

#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn show(&mut self, message: impl Into<String>, icon: ToastIcon, duration: Duration) {
        self.show_at(message, icon, duration, Instant::now());
    }

    pub fn show_default(&mut self, message: impl Into<String>, icon: ToastIcon) {
        self.show(message, icon, Duration::from_millis(TOAST_DEFAULT_MS));
    }

    pub fn show_at(&mut self, message: impl Into<String>, icon: ToastIcon, duration: Duration, now: Instant) {
        self.current = Some(Toast::new(message, icon, duration, now));
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Restart the timer of the visible toast (hover pauses it)
    pub fn hold(&mut self, now: Instant) {
        if let Some(toast) = self.current.as_mut() {
            toast.shown_at = now;
        }
    }

    /// Drop the toast once its time is up. Returns true while one is still showing.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn toast_expires_after_duration_and_fade() {
        let t0 = Instant::now();
        let mut slot = ToastSlot::default();
        slot.show_at("Analysis complete!", ToastIcon::Check, ms(2500), t0);

        assert!(slot.tick(t0 + ms(2500)));
        assert!(slot.tick(t0 + ms(2500) + FADE - ms(1)));
        assert!(!slot.tick(t0 + ms(2500) + FADE));
        assert!(slot.current().is_none());
    }

    #[test]
    fn newer_toast_is_not_hidden_by_older_deadline() {
        let t0 = Instant::now();
        let mut slot = ToastSlot::default();
        slot.show_at("Connected to FactScope server", ToastIcon::Check, ms(2000), t0);
        slot.show_at("Analysis complete!", ToastIcon::Check, ms(2500), t0 + ms(1500));

        // The first toast's deadline has passed; the second must survive it.
        assert!(slot.tick(t0 + ms(2000) + FADE));
        assert_eq!(slot.current().unwrap().message, "Analysis complete!");
    }

    #[test]
    fn hold_restarts_the_timer() {
        let t0 = Instant::now();
        let mut slot = ToastSlot::default();
        slot.show_at("hover me", ToastIcon::Info, ms(1000), t0);
        slot.hold(t0 + ms(900));
        assert!(slot.tick(t0 + ms(1800)));
    }

    #[test]
    fn alpha_fades_to_zero() {
        let t0 = Instant::now();
        let toast = Toast::new("x", ToastIcon::Info, ms(1000), t0);
        assert_eq!(toast.alpha(t0 + ms(500)), 1.0);
        assert!(toast.alpha(t0 + ms(1000) + FADE / 2) < 1.0);
        assert_eq!(toast.alpha(t0 + ms(1000) + FADE), 0.0);
    }
}
