//! HTTP Client
//!
//! Builds requests against the feedback API, attaches the session headers and
//! turns every response into either parsed data or an [`ApiError`]. Calls are
//! fire-once: no retries, no timeouts.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Request, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ApiError;
use crate::session::SessionStore;

/// How a 401/403 answer is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// The session was rejected: force a logout
    Session,
    /// Credentials being checked were wrong: plain request error
    Credentials,
}

/// Feedback API client
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Absolute URL for an endpoint path such as `/feedback`
    pub fn url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let joined = format!("{}{}", self.base, endpoint);
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", joined, e)))
    }

    /// Request builder carrying only the bearer header, when logged in. The
    /// body encoder picks the content type.
    pub fn authorized(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, self.url(endpoint)?);
        Ok(match self.session.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Request builder with the JSON content type plus the bearer header
    pub fn builder(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .authorized(method, endpoint)?
            .header(CONTENT_TYPE, "application/json"))
    }

    pub fn build<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<Request, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.builder(method, endpoint)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder.build()?)
    }

    /// Issue a request and parse the JSON answer
    pub async fn request<T, B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build(method, endpoint, body)?;
        self.execute(request, AuthPolicy::Session).await
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }

    /// Send a prepared request. Every failure is logged before it is returned.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        policy: AuthPolicy,
    ) -> Result<T, ApiError> {
        let label = format!("{} {}", request.method(), request.url().path());
        log::debug!("[API] {}", label);

        let result = match self.http.execute(request).await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => self.interpret(status, &body, policy),
                    Err(e) => Err(ApiError::Transport(e.to_string())),
                }
            }
            Err(e) => Err(ApiError::Transport(e.to_string())),
        };

        if let Err(e) = &result {
            log::error!("[API] {} failed: {}", label, e);
        }
        result
    }

    /// Map a status and raw body onto the result contract
    pub fn interpret<T: DeserializeOwned>(
        &self,
        status: StatusCode,
        body: &str,
        policy: AuthPolicy,
    ) -> Result<T, ApiError> {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            if policy == AuthPolicy::Session {
                self.session.force_logout();
                return Err(ApiError::Unauthorized {
                    status: status.as_u16(),
                });
            }
            return Err(ApiError::request(status.as_u16(), server_message(body)));
        }
        if !status.is_success() {
            return Err(ApiError::request(status.as_u16(), server_message(body)));
        }
        Ok(serde_json::from_str(body)?)
    }
}

/// `message` or FastAPI-style string `detail` from an error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Severity, ToastQueue};
    use crate::view_state::{View, ViewState};
    use reqwest::header::AUTHORIZATION;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8000", SessionStore::in_memory("authToken")).unwrap()
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let err = ApiClient::new("not a url", SessionStore::in_memory("k")).err().unwrap();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_headers_without_token() {
        let request = client().build::<()>(Method::GET, "/categories", None).unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8000/categories");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_bearer_header_follows_session() {
        let api = client();
        api.session().set("abc.def.ghi");
        for endpoint in ["/analytics", "/feedback", "/auth/me"] {
            let request = api.build::<()>(Method::GET, endpoint, None).unwrap();
            assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc.def.ghi");
        }
        api.session().clear();
        let request = api.build::<()>(Method::GET, "/analytics", None).unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let api = ApiClient::new("https://school.example/api/", SessionStore::in_memory("k")).unwrap();
        assert_eq!(
            api.url("/feedback").unwrap().as_str(),
            "https://school.example/api/feedback"
        );
    }

    #[test]
    fn test_json_body_is_serialized() {
        let request = client()
            .build(Method::POST, "/feedback", Some(&json!({"text": "hi"})))
            .unwrap();
        assert_eq!(request.method(), Method::POST);
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(sent, json!({"text": "hi"}));
    }

    #[test]
    fn test_success_is_parsed() {
        let value: Value = client()
            .interpret(StatusCode::OK, r#"{"ok":true}"#, AuthPolicy::Session)
            .unwrap();
        assert_eq!(value, json!({"ok": true}));

        let err = client()
            .interpret::<Vec<u32>>(StatusCode::OK, "{}", AuthPolicy::Session)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_request_errors_carry_server_message() {
        let api = client();
        let err = api
            .interpret::<Value>(StatusCode::NOT_FOUND, r#"{"detail":"Feedback not found"}"#, AuthPolicy::Session)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Request { status: 404, message: "Feedback not found".into() }
        );

        let err = api
            .interpret::<Value>(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>", AuthPolicy::Session)
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_auth_failure_forces_logout_for_every_endpoint() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let api = client();
            let view = Rc::new(RefCell::new(ViewState::default()));
            let toasts = Rc::new(RefCell::new(ToastQueue::default()));
            {
                let (view, toasts) = (view.clone(), toasts.clone());
                api.session().set_logout_hook(move || {
                    view.borrow_mut().on_forced_logout();
                    toasts.borrow_mut().push(Severity::Error, "Session expired");
                });
            }
            api.session().set("tok");
            view.borrow_mut().on_login();
            view.borrow_mut().navigate(View::Dashboard);

            let err = api.interpret::<Value>(status, "{}", AuthPolicy::Session).unwrap_err();

            assert_eq!(err, ApiError::Unauthorized { status: status.as_u16() });
            assert_eq!(api.session().get(), None);
            assert_eq!(view.borrow().view, View::Home);
            assert!(!view.borrow().logged_in);
            assert_eq!(toasts.borrow().toasts().len(), 1);
            assert_eq!(toasts.borrow().toasts()[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_bad_credentials_do_not_logout() {
        let api = client();
        api.session().set("old");
        let err = api
            .interpret::<Value>(StatusCode::UNAUTHORIZED, r#"{"detail":"Incorrect username or password"}"#, AuthPolicy::Credentials)
            .unwrap_err();
        assert!(!err.is_auth_failure());
        assert_eq!(api.session().get().as_deref(), Some("old"));
    }
}
