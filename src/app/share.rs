//! Share the rendered verdict: native handler first, clipboard as fallback

use super::toast::{ToastIcon, ToastSlot};
use super::App;
use crate::constants::SHARE_TITLE;
use crate::view_model::ResultView;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::cell::RefCell;
use tracing::{debug, info, warn};

#[derive(Debug, PartialEq)]
pub enum ShareError {
    /// User dismissed the share sheet; not an error worth a fallback.
    /// Only platform share sheets report this; the mail handler cannot.
    #[allow(dead_code)]
    Cancelled,
    Failed(String),
}

/// Platform share facility (share sheet, mail handler, ...)
pub trait NativeShare {
    fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Copied,
    ManualCopy,
}

impl ShareOutcome {
    pub fn notify(self, toast: &mut ToastSlot) {
        match self {
            ShareOutcome::Shared => toast.show_default("Shared successfully!", ToastIcon::Check),
            ShareOutcome::Cancelled => {}
            ShareOutcome::Copied => {
                toast.show_default("Result copied to clipboard!", ToastIcon::Clipboard)
            }
            ShareOutcome::ManualCopy => {
                toast.show_default("Press Ctrl+C to copy the result", ToastIcon::Info)
            }
        }
    }
}

/// Summary text, read back from what the result page currently shows
pub fn share_text(view: &ResultView) -> String {
    format!(
        "🔍 FactScope Analysis: {} ({} confidence)\n📊 Sentiment: {}\n📰 Headline: {}\n\nVerified with FactScope AI",
        view.label, view.confidence_text, view.sentiment, view.preview
    )
}

pub fn share_result(
    text: &str,
    native: Option<&dyn NativeShare>,
    clipboard: &dyn Clipboard,
) -> ShareOutcome {
    if let Some(native) = native {
        match native.share(SHARE_TITLE, text) {
            Ok(()) => return ShareOutcome::Shared,
            Err(ShareError::Cancelled) => return ShareOutcome::Cancelled,
            Err(ShareError::Failed(e)) => {
                warn!(error = %e, "Native share failed, falling back to clipboard");
            }
        }
    }
    copy_with_fallback(text, clipboard)
}

fn copy_with_fallback(text: &str, clipboard: &dyn Clipboard) -> ShareOutcome {
    match clipboard.copy(text) {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "Clipboard unavailable");
            info!(share_text = %text, "Share text");
            ShareOutcome::ManualCopy
        }
    }
}

/// Hands a `mailto:` URI to the OS default handler
pub struct MailShare;

impl MailShare {
    pub fn mailto_uri(title: &str, text: &str) -> String {
        format!(
            "mailto:?subject={}&body={}",
            utf8_percent_encode(title, NON_ALPHANUMERIC),
            utf8_percent_encode(text, NON_ALPHANUMERIC)
        )
    }
}

impl NativeShare for MailShare {
    fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        let uri = Self::mailto_uri(title, text);
        debug!(len = uri.len(), "Opening mail handler");
        open::that_detached(&uri).map_err(|e| ShareError::Failed(e.to_string()))
    }
}

/// OS clipboard. The handle is opened on first use and kept for the app's
/// lifetime, since X11 drops clipboard contents when their owner goes away.
#[derive(Default)]
pub struct SystemClipboard {
    handle: RefCell<Option<arboard::Clipboard>>,
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), String> {
        let mut handle = self.handle.borrow_mut();
        if handle.is_none() {
            *handle = Some(arboard::Clipboard::new().map_err(describe_clipboard_error)?);
        }
        let Some(clipboard) = handle.as_mut() else {
            return Err("clipboard unavailable".to_string());
        };
        clipboard
            .set_text(text.to_string())
            .map_err(describe_clipboard_error)
    }
}

pub fn describe_clipboard_error(e: arboard::Error) -> String {
    match e {
        arboard::Error::ClipboardNotSupported => "clipboard not supported in this session".to_string(),
        arboard::Error::ClipboardOccupied => "clipboard is held by another program".to_string(),
        other => other.to_string(),
    }
}

impl App {
    pub fn share_current_result(&mut self) {
        let Some(view) = self.state.result.as_ref() else {
            return;
        };
        let text = share_text(view);
        let native = self.settings.native_share.then_some(&MailShare as &dyn NativeShare);
        let outcome = share_result(&text, native, &self.clipboard);
        info!(outcome = ?outcome, "Result shared");
        outcome.notify(&mut self.state.toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VerifyEnvelope;
    use serde_json::json;

    struct FakeNative(Result<(), ShareError>);

    impl NativeShare for FakeNative {
        fn share(&self, _title: &str, _text: &str) -> Result<(), ShareError> {
            match &self.0 {
                Ok(()) => Ok(()),
                Err(ShareError::Cancelled) => Err(ShareError::Cancelled),
                Err(ShareError::Failed(e)) => Err(ShareError::Failed(e.clone())),
            }
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        deny: bool,
        copied: RefCell<Option<String>>,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&self, text: &str) -> Result<(), String> {
            if self.deny {
                return Err("permission denied".into());
            }
            *self.copied.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    fn view() -> ResultView {
        let result = serde_json::from_value::<VerifyEnvelope>(json!({
            "success": true,
            "input_text": "NASA launched a new satellite",
            "final_verdict": { "is_fake": false, "confidence": 88.4, "explanation": "" },
            "sentiment_analysis": { "sentiment": "Positive (Factual)", "sentiment_score": 0.7 }
        }))
        .unwrap()
        .into_result()
        .unwrap();
        ResultView::from_result(&result)
    }

    #[test]
    fn share_text_has_fixed_format() {
        assert_eq!(
            share_text(&view()),
            "🔍 FactScope Analysis: REAL NEWS VERIFIED (88.4% confidence)\n\
             📊 Sentiment: Positive (Factual)\n\
             📰 Headline: NASA launched a new satellite\n\n\
             Verified with FactScope AI"
        );
    }

    #[test]
    fn share_text_reads_back_displayed_fields() {
        let mut v = view();
        v.label = "EDITED".into();
        assert!(share_text(&v).contains("FactScope Analysis: EDITED"));
    }

    #[test]
    fn native_success_does_not_touch_clipboard() {
        let clipboard = FakeClipboard::default();
        let outcome = share_result("t", Some(&FakeNative(Ok(()))), &clipboard);
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(clipboard.copied.borrow().is_none());
    }

    #[test]
    fn native_cancel_has_no_fallback() {
        let clipboard = FakeClipboard::default();
        let outcome = share_result("t", Some(&FakeNative(Err(ShareError::Cancelled))), &clipboard);
        assert_eq!(outcome, ShareOutcome::Cancelled);
        assert!(clipboard.copied.borrow().is_none());
    }

    #[test]
    fn native_failure_falls_back_to_clipboard() {
        let clipboard = FakeClipboard::default();
        let native = FakeNative(Err(ShareError::Failed("no handler".into())));
        let outcome = share_result("summary", Some(&native), &clipboard);
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.copied.borrow().as_deref(), Some("summary"));
    }

    #[test]
    fn denied_clipboard_asks_for_manual_copy() {
        let clipboard = FakeClipboard {
            deny: true,
            ..FakeClipboard::default()
        };
        assert_eq!(share_result("t", None, &clipboard), ShareOutcome::ManualCopy);

        let mut toast = ToastSlot::default();
        ShareOutcome::ManualCopy.notify(&mut toast);
        assert_eq!(toast.current().unwrap().message, "Press Ctrl+C to copy the result");
    }

    struct UnsupportedClipboard;

    impl Clipboard for UnsupportedClipboard {
        fn copy(&self, _text: &str) -> Result<(), String> {
            Err(describe_clipboard_error(arboard::Error::ClipboardNotSupported))
        }
    }

    #[test]
    fn clipboard_errors_are_described() {
        assert_eq!(
            describe_clipboard_error(arboard::Error::ClipboardNotSupported),
            "clipboard not supported in this session"
        );
        assert_eq!(
            describe_clipboard_error(arboard::Error::ClipboardOccupied),
            "clipboard is held by another program"
        );
        assert!(!describe_clipboard_error(arboard::Error::ContentNotAvailable).is_empty());
    }

    #[test]
    fn unsupported_clipboard_falls_through_to_manual_copy() {
        let native = FakeNative(Err(ShareError::Failed("no mail handler".into())));
        let outcome = share_result("summary", Some(&native), &UnsupportedClipboard);
        assert_eq!(outcome, ShareOutcome::ManualCopy);

        let mut toast = ToastSlot::default();
        outcome.notify(&mut toast);
        assert_ne!(toast.current().unwrap().message, "Result copied to clipboard!");
    }

    #[test]
    fn cancelled_share_shows_no_toast() {
        let mut toast = ToastSlot::default();
        ShareOutcome::Cancelled.notify(&mut toast);
        assert!(toast.current().is_none());
    }

    #[test]
    fn mailto_uri_is_percent_encoded() {
        let uri = MailShare::mailto_uri("FactScope News Verification", "a b\nc");
        assert_eq!(
            uri,
            "mailto:?subject=FactScope%20News%20Verification&body=a%20b%0Ac"
        );
    }
}
