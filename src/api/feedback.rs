//! Feedback Endpoints

use reqwest::{Method, Request};
use serde::Deserialize;

use super::{ApiClient, ApiError, AuthPolicy};
use crate::models::{FeedbackRecord, FilterSet, NewFeedback, Sentiment, SubmitFeedbackResponse};

/// Generic `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// `POST /feedback`
    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<SubmitFeedbackResponse, ApiError> {
        self.post("/feedback", feedback).await
    }

    pub fn list_feedback_request(&self, filters: &FilterSet) -> Result<Request, ApiError> {
        Ok(self.builder(Method::GET, "/feedback")?.query(filters).build()?)
    }

    /// `GET /feedback?category_id=..&subject_id=..&sentiment=..` (authenticated)
    pub async fn list_feedback(&self, filters: &FilterSet) -> Result<Vec<FeedbackRecord>, ApiError> {
        let request = self.list_feedback_request(filters)?;
        self.execute(request, AuthPolicy::Session).await
    }

    /// `DELETE /feedback/{id}` (admin only)
    pub async fn delete_feedback(&self, id: u32) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/feedback/{}", id)).await
    }

    pub fn test_sentiment_request(&self, text: &str) -> Result<Request, ApiError> {
        Ok(self
            .builder(Method::GET, "/test-sentiment")?
            .query(&[("text", text)])
            .build()?)
    }

    /// `GET /test-sentiment?text=...`
    pub async fn test_sentiment(&self, text: &str) -> Result<Sentiment, ApiError> {
        let request = self.test_sentiment_request(text)?;
        self.execute(request, AuthPolicy::Session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use reqwest::header::AUTHORIZATION;
    use serde_json::{json, Value};

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8000", SessionStore::in_memory("authToken")).unwrap()
    }

    #[test]
    fn test_submit_body_is_exactly_the_draft() {
        let api = client();
        api.session().set("tok");
        let body = NewFeedback {
            text: "Great lesson today!!".into(),
            category_id: 2,
            subject_id: 5,
        };
        let request = api.build(Method::POST, "/feedback", Some(&body)).unwrap();
        assert_eq!(request.url().path(), "/feedback");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer tok");
        let sent: Value = serde_json::from_slice(request.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(
            sent,
            json!({"text": "Great lesson today!!", "category_id": 2, "subject_id": 5})
        );
    }

    #[test]
    fn test_submit_response_shape() {
        let response: SubmitFeedbackResponse = serde_json::from_str(
            r#"{"message":"ok","sentiment":{"label":"Positive","score":0.87,"confidence":0.9}}"#,
        )
        .unwrap();
        assert_eq!(response.sentiment.label, "Positive");
        assert_eq!(response.sentiment.confidence, Some(0.9));
    }

    #[test]
    fn test_list_query_omits_empty_filters() {
        let api = client();
        let request = api.list_feedback_request(&FilterSet::default()).unwrap();
        assert_eq!(request.url().query(), None);

        let filters = FilterSet::from_selection("2", "", "Positive");
        let request = api.list_feedback_request(&filters).unwrap();
        assert_eq!(request.url().query(), Some("category_id=2&sentiment=Positive"));
    }

    #[test]
    fn test_sentiment_text_is_encoded() {
        let request = client().test_sentiment_request("fun & games?").unwrap();
        assert_eq!(request.url().path(), "/test-sentiment");
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("text".to_string(), "fun & games?".to_string())]);
    }
}
