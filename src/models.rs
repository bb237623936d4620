//! Frontend Models
//!
//! Data structures matching the feedback API payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category or subject reference entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Sentiment classification returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Body of `POST /feedback`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFeedback {
    pub text: String,
    pub category_id: u32,
    pub subject_id: u32,
}

/// Response of `POST /feedback`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitFeedbackResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub sentiment: Sentiment,
}

/// Feedback record as listed on the dashboard (display-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_confidence: Option<f64>,
    pub created_at: String,
}

impl FeedbackRecord {
    pub fn label(&self) -> &str {
        self.sentiment_label.as_deref().unwrap_or("Neutral")
    }

    /// Lowercase label used as a CSS modifier
    pub fn label_class(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn score(&self) -> f64 {
        self.sentiment_score.unwrap_or(0.0)
    }

    /// `"<category> - <subject>"`, with placeholders for deleted references
    pub fn heading(&self) -> String {
        format!(
            "{} - {}",
            self.category.as_deref().unwrap_or("?"),
            self.subject.as_deref().unwrap_or("?")
        )
    }
}

/// Aggregated dashboard numbers from `GET /analytics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_feedback: u64,
    pub average_sentiment: f64,
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub feedback_by_category: BTreeMap<String, u64>,
    #[serde(default)]
    pub feedback_by_subject: BTreeMap<String, u64>,
}

impl Analytics {
    /// Count for a sentiment label, 0 when the server omitted it
    pub fn count_for(&self, label: &str) -> u64 {
        self.sentiment_distribution.get(label).copied().unwrap_or(0)
    }
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Current user from `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// In-progress feedback form, held as raw form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub text: String,
    pub category_id: String,
    pub subject_id: String,
}

impl FeedbackDraft {
    /// Field/value pairs in the shape the validator expects
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("text", self.text.as_str()),
            ("category_id", self.category_id.as_str()),
            ("subject_id", self.subject_id.as_str()),
        ]
    }

    /// Convert to the wire body. `None` if a reference id is not a number.
    pub fn to_request(&self) -> Option<NewFeedback> {
        Some(NewFeedback {
            text: self.text.clone(),
            category_id: self.category_id.trim().parse().ok()?,
            subject_id: self.subject_id.trim().parse().ok()?,
        })
    }
}

/// Dashboard list filters; empty selections are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

impl FilterSet {
    /// Build from raw select values, treating `""` as "any"
    pub fn from_selection(category: &str, subject: &str, sentiment: &str) -> Self {
        Self {
            category_id: category.trim().parse().ok(),
            subject_id: subject.trim().parse().ok(),
            sentiment: Some(sentiment.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// Raw select values for these filters, `""` meaning "any"
    pub fn selection(&self) -> (String, String, String) {
        let id = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_default();
        (
            id(self.category_id),
            id(self.subject_id),
            self.sentiment.clone().unwrap_or_default(),
        )
    }
}

/// Sentiment labels offered in the dashboard filter
pub const SENTIMENT_LABELS: &[&str] = &["Positive", "Neutral", "Negative"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_to_request() {
        let draft = FeedbackDraft {
            text: "Great lesson today!!".into(),
            category_id: "2".into(),
            subject_id: "5".into(),
        };
        let body = draft.to_request().unwrap();
        assert_eq!(body.category_id, 2);
        assert_eq!(body.subject_id, 5);

        let bad = FeedbackDraft { category_id: String::new(), ..draft };
        assert!(bad.to_request().is_none());
    }

    #[test]
    fn test_filter_from_selection() {
        let filters = FilterSet::from_selection("3", "", "Negative");
        assert_eq!(filters.category_id, Some(3));
        assert_eq!(filters.subject_id, None);
        assert_eq!(filters.sentiment.as_deref(), Some("Negative"));
        assert_eq!(FilterSet::from_selection("", " ", ""), FilterSet::default());
    }

    #[test]
    fn test_filter_selection_restores_selects() {
        let filters = FilterSet::from_selection("3", "", "Negative");
        assert_eq!(
            filters.selection(),
            ("3".to_string(), String::new(), "Negative".to_string())
        );
        let (category, subject, sentiment) = filters.selection();
        assert_eq!(FilterSet::from_selection(&category, &subject, &sentiment), filters);
        assert_eq!(
            FilterSet::default().selection(),
            (String::new(), String::new(), String::new())
        );
    }

    #[test]
    fn test_analytics_missing_labels_count_zero() {
        let analytics: Analytics = serde_json::from_str(
            r#"{"total_feedback":3,"average_sentiment":0.25,"sentiment_distribution":{"Positive":3}}"#,
        )
        .unwrap();
        assert_eq!(analytics.count_for("Positive"), 3);
        assert_eq!(analytics.count_for("Negative"), 0);
        assert!(analytics.feedback_by_category.is_empty());
    }

    #[test]
    fn test_feedback_record_nullable_fields() {
        let record: FeedbackRecord = serde_json::from_str(
            r#"{"id":1,"text":"ok","sentiment_label":null,"sentiment_score":null,
                "category":null,"subject":"Math","created_at":"2024-05-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(record.label(), "Neutral");
        assert_eq!(record.score(), 0.0);
        assert_eq!(record.heading(), "? - Math");
    }
}
