//! View State
//!
//! Which section is visible, how navigation depends on the session, and the
//! sequencing of live sentiment previews. Kept free of DOM access.

use crate::models::Sentiment;
use crate::validation::FEEDBACK_MIN_CHARS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Login,
    Dashboard,
}

impl View {
    /// Where a navigation request actually lands for the given auth state
    pub fn resolve(requested: View, logged_in: bool) -> View {
        match (requested, logged_in) {
            (View::Dashboard, false) => View::Login,
            (View::Login, true) => View::Dashboard,
            (view, _) => view,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Login",
            View::Dashboard => "Dashboard",
        }
    }
}

/// Active view plus the logged-in flag that drives the navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub view: View,
    pub logged_in: bool,
}

impl ViewState {
    pub fn new(logged_in: bool) -> Self {
        Self {
            view: View::Home,
            logged_in,
        }
    }

    /// Switch views. Returns true when the dashboard should refresh.
    pub fn navigate(&mut self, requested: View) -> bool {
        self.view = View::resolve(requested, self.logged_in);
        self.view == View::Dashboard && self.logged_in
    }

    pub fn on_login(&mut self) {
        self.logged_in = true;
    }

    /// Logged out, back on Home
    pub fn on_forced_logout(&mut self) {
        self.logged_in = false;
        self.view = View::Home;
    }

    pub fn dashboard_live(&self) -> bool {
        self.view == View::Dashboard && self.logged_in
    }
}

/// What to do after the feedback text changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewAction {
    Hide,
    Request { seq: u64, text: String },
}

/// Issues sequence numbers for preview requests so only the newest
/// response is rendered.
#[derive(Debug, Clone, Default)]
pub struct PreviewTracker {
    latest: u64,
}

impl PreviewTracker {
    pub fn on_input(&mut self, text: &str) -> PreviewAction {
        // Any newer input supersedes whatever is in flight
        self.latest += 1;
        if text.trim().chars().count() < FEEDBACK_MIN_CHARS {
            PreviewAction::Hide
        } else {
            PreviewAction::Request {
                seq: self.latest,
                text: text.to_string(),
            }
        }
    }

    /// Invalidate in-flight requests without issuing a new one
    pub fn reset(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }

    /// Preview to show once request `seq` finished. `None` when newer input
    /// superseded it; a failed request clears the preview.
    pub fn settle<E>(&self, seq: u64, result: Result<Sentiment, E>) -> Option<Option<Sentiment>> {
        self.is_current(seq).then(|| result.ok())
    }
}

/// Toast text for a classified submission
pub fn sentiment_message(sentiment: &Sentiment) -> String {
    format!(
        "Sentiment detected: {} (Score: {:.2}, Confidence: {:.1}%)",
        sentiment.label,
        sentiment.score,
        sentiment.confidence.unwrap_or(0.0) * 100.0
    )
}

/// `"<n>/1000 characters"` under the text area
pub fn char_counter(text: &str) -> String {
    format!(
        "{}/{} characters",
        text.chars().count(),
        crate::validation::FEEDBACK_MAX_CHARS
    )
}

/// Render a server timestamp for the list; falls back to the raw value
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%d-%m-%Y %H:%M:%S";
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format(DISPLAY).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_guards_dashboard() {
        assert_eq!(View::resolve(View::Dashboard, false), View::Login);
        assert_eq!(View::resolve(View::Dashboard, true), View::Dashboard);
        assert_eq!(View::resolve(View::Login, true), View::Dashboard);
        assert_eq!(View::resolve(View::Home, false), View::Home);
        assert_eq!(View::resolve(View::Home, true), View::Home);
    }

    #[test]
    fn test_navigate_reports_refresh() {
        let mut state = ViewState::new(false);
        assert!(!state.navigate(View::Dashboard));
        assert_eq!(state.view, View::Login);

        state.on_login();
        assert!(state.navigate(View::Dashboard));
        assert!(state.dashboard_live());
        assert!(!state.navigate(View::Home));
        assert!(!state.dashboard_live());
    }

    #[test]
    fn test_forced_logout_resets_to_home() {
        let mut state = ViewState::new(true);
        state.navigate(View::Dashboard);
        state.on_forced_logout();
        assert_eq!(state, ViewState { view: View::Home, logged_in: false });
    }

    #[test]
    fn test_preview_threshold() {
        let mut tracker = PreviewTracker::default();
        let text = "Great lesson";
        let mut requests = Vec::new();
        for end in 1..=10 {
            if let PreviewAction::Request { text, .. } = tracker.on_input(&text[..end]) {
                requests.push(text);
            }
        }
        // nothing up to 9 characters, exactly one at the 10th
        assert_eq!(requests, vec!["Great less".to_string()]);
    }

    #[test]
    fn test_preview_ignores_surrounding_whitespace() {
        let mut tracker = PreviewTracker::default();
        assert_eq!(tracker.on_input("   short    "), PreviewAction::Hide);
    }

    #[test]
    fn test_stale_preview_is_discarded() {
        let mut tracker = PreviewTracker::default();
        let PreviewAction::Request { seq: first, .. } = tracker.on_input("first text long") else {
            panic!("expected request");
        };
        let PreviewAction::Request { seq: second, .. } = tracker.on_input("second text long") else {
            panic!("expected request");
        };
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));

        tracker.reset();
        assert!(!tracker.is_current(second));
    }

    #[test]
    fn test_failed_preview_clears_only_when_current() {
        let mut tracker = PreviewTracker::default();
        let PreviewAction::Request { seq: stale, .. } = tracker.on_input("first text long") else {
            panic!("expected request");
        };
        let PreviewAction::Request { seq, .. } = tracker.on_input("second text long") else {
            panic!("expected request");
        };
        let sentiment = Sentiment {
            label: "Positive".into(),
            score: 0.6,
            confidence: None,
        };

        assert_eq!(tracker.settle(seq, Ok::<_, ()>(sentiment.clone())), Some(Some(sentiment)));
        assert_eq!(tracker.settle(seq, Err("HTTP error! status: 500")), Some(None));
        assert_eq!(tracker.settle(stale, Err("HTTP error! status: 500")), None);
    }

    #[test]
    fn test_hide_invalidates_in_flight() {
        let mut tracker = PreviewTracker::default();
        let PreviewAction::Request { seq, .. } = tracker.on_input("long enough text") else {
            panic!("expected request");
        };
        assert_eq!(tracker.on_input("short"), PreviewAction::Hide);
        assert!(!tracker.is_current(seq));
    }

    #[test]
    fn test_sentiment_message_format() {
        let sentiment = Sentiment {
            label: "Positive".into(),
            score: 0.87,
            confidence: Some(0.9),
        };
        assert_eq!(
            sentiment_message(&sentiment),
            "Sentiment detected: Positive (Score: 0.87, Confidence: 90.0%)"
        );
    }

    #[test]
    fn test_char_counter() {
        assert_eq!(char_counter(""), "0/1000 characters");
        assert_eq!(char_counter("héllo"), "5/1000 characters");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-05-01T10:02:03.123456"), "01-05-2024 10:02:03");
        assert_eq!(format_timestamp("2024-05-01T10:02:03+00:00"), "01-05-2024 10:02:03");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
