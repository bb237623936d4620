//! Auth Endpoints

use reqwest::{Method, Request};

use super::{ApiClient, ApiError, AuthPolicy};
use crate::models::{LoginResponse, UserProfile};

impl ApiClient {
    /// Form-encoded credentials for `POST /auth/login`
    pub fn login_request(&self, username: &str, password: &str) -> Result<Request, ApiError> {
        Ok(self
            .authorized(Method::POST, "/auth/login")?
            .form(&[("username", username), ("password", password)])
            .build()?)
    }

    /// `POST /auth/login`.
    ///
    /// A 401/403 here means wrong credentials, not a dead session.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = self.login_request(username, password)?;
        self.execute(request, AuthPolicy::Credentials).await
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get("/auth/me").await
    }
}
