//! # REST client for the fees backend
//!
//! One [`ApiClient`] instance serves the whole app. It joins endpoint
//! paths onto the configured base URL, attaches the stored bearer token
//! to every request, and funnels every response through the same
//! envelope/error handling:
//!
//! - 401 clears the session store and returns [`ApiError::Unauthorized`]
//!   (the UI layer decides whether to redirect; see the public-route
//!   guard there).
//! - Other non-2xx statuses surface the body's `message` field via
//!   [`ApiError::Status`].
//! - Success bodies are usually `{ "data": ... }` but not always;
//!   [`from_envelope`] unwraps `data` when present and falls back to the
//!   raw body.
//!
//! Single attempt per call. No retry, no backoff, no timeout.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use store::{FeeDeskConfig, SessionStore};

use crate::error::ApiError;
use crate::models::{
    Admin, AdminInput, ChangePasswordRequest, DashboardStats, Fee, FeeInput, LoginRequest,
    LoginResponse, PayFeeRequest, Student, StudentInput,
};
use crate::notify::{BulkRequest, BulkResponse, CallPayload, EmailPayload, SmsPayload};

/// Typed HTTP access to the fees backend.
///
/// Cloning is cheap; the underlying `reqwest::Client` and session store
/// are both handles.
#[derive(Clone)]
pub struct ApiClient<S: SessionStore> {
    base_url: String,
    http: reqwest::Client,
    session: S,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, session: S) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn from_config(config: &FeeDeskConfig, session: S) -> Self {
        Self::new(config.api.base_url.clone(), session)
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status().as_u16();
        if status == 401 {
            tracing::warn!(%url, "unauthorized response, clearing session");
        }

        // Non-JSON bodies (empty 204s, HTML error pages) decode as Null.
        let body: Value = response.json().await.unwrap_or(Value::Null);

        settle(&self.session, status, body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        from_envelope(self.send(Method::GET, path, None).await?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        from_envelope(self.send(Method::POST, path, Some(body)).await?)
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = match body {
            Some(b) => Some(serde_json::to_value(b).map_err(|e| ApiError::Decode(e.to_string()))?),
            None => None,
        };
        from_envelope(self.send(Method::PUT, path, body).await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    // --- auth ---

    /// `POST /auth/login`. On success the token (and the admin object,
    /// when the backend returns one) is persisted to the session store.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post("/auth/login", request).await?;
        self.session.set_token(&response.token);
        if let Some(admin) = &response.admin {
            if let Ok(json) = serde_json::to_string(admin) {
                self.session.set_user_json(&json);
            }
        }
        Ok(response)
    }

    /// `PUT /auth/change-password`.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        let _: Value = self.put("/auth/change-password", Some(request)).await?;
        Ok(())
    }

    // --- admin ---

    /// `GET /admin/dashboard`.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/admin/dashboard").await
    }

    /// `GET /admin`.
    pub async fn list_admins(&self) -> Result<Vec<Admin>, ApiError> {
        self.get("/admin").await
    }

    /// `POST /admin/add`.
    pub async fn add_admin(&self, input: &AdminInput) -> Result<Admin, ApiError> {
        self.post("/admin/add", input).await
    }

    /// `DELETE /admin/:id`.
    pub async fn delete_admin(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/admin/{id}")).await
    }

    // --- students ---

    /// `GET /students/show-students`.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get("/students/show-students").await
    }

    /// `GET /students/:id`.
    pub async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        self.get(&format!("/students/{id}")).await
    }

    /// `GET /students/:id/fees`.
    pub async fn student_fees(&self, id: &str) -> Result<Vec<Fee>, ApiError> {
        self.get(&format!("/students/{id}/fees")).await
    }

    /// `POST /students/add-student`.
    pub async fn create_student(&self, input: &StudentInput) -> Result<Student, ApiError> {
        self.post("/students/add-student", input).await
    }

    /// `PUT /students/:id`.
    pub async fn update_student(&self, id: &str, input: &StudentInput) -> Result<Student, ApiError> {
        self.put(&format!("/students/{id}"), Some(input)).await
    }

    /// `DELETE /students/:id`.
    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/students/{id}")).await
    }

    // --- fees ---

    /// `GET /fees`.
    pub async fn list_fees(&self) -> Result<Vec<Fee>, ApiError> {
        self.get("/fees").await
    }

    /// `GET /fees/:id`.
    pub async fn get_fee(&self, id: &str) -> Result<Fee, ApiError> {
        self.get(&format!("/fees/{id}")).await
    }

    /// `POST /fees`.
    pub async fn create_fee(&self, input: &FeeInput) -> Result<Fee, ApiError> {
        self.post("/fees", input).await
    }

    /// `PUT /fees/:id`.
    pub async fn update_fee(&self, id: &str, input: &FeeInput) -> Result<Fee, ApiError> {
        self.put(&format!("/fees/{id}"), Some(input)).await
    }

    /// `PUT /fees/:id/pay`. An empty request records a full payment;
    /// amount and payment method are forwarded when given so partial
    /// payments stay possible if the backend honors them.
    pub async fn pay_fee(&self, id: &str, request: &PayFeeRequest) -> Result<(), ApiError> {
        let body = (!request.is_empty()).then_some(request);
        let _: Value = self.put(&format!("/fees/{id}/pay"), body).await?;
        Ok(())
    }

    /// `DELETE /fees/:id`.
    pub async fn delete_fee(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/fees/{id}")).await
    }

    /// `GET /fees/due`.
    pub async fn due_fees(&self) -> Result<Vec<Fee>, ApiError> {
        self.get("/fees/due").await
    }

    /// `GET /fees/upcoming`.
    pub async fn upcoming_fees(&self) -> Result<Vec<Fee>, ApiError> {
        self.get("/fees/upcoming").await
    }

    // --- notifications ---

    /// `POST /notifications/send-email`.
    pub async fn send_email(&self, payload: &EmailPayload) -> Result<(), ApiError> {
        let _: Value = self.post("/notifications/send-email", payload).await?;
        Ok(())
    }

    /// `POST /notifications/send-sms`.
    pub async fn send_sms(&self, payload: &SmsPayload) -> Result<(), ApiError> {
        let _: Value = self.post("/notifications/send-sms", payload).await?;
        Ok(())
    }

    /// `POST /notifications/make-call`.
    pub async fn make_call(&self, payload: &CallPayload) -> Result<(), ApiError> {
        let _: Value = self.post("/notifications/make-call", payload).await?;
        Ok(())
    }

    /// `POST /notifications/send-bulk`. Returns the backend's aggregate
    /// summary; per-recipient outcomes are not reported.
    pub async fn send_bulk(&self, request: &BulkRequest) -> Result<BulkResponse, ApiError> {
        self.post("/notifications/send-bulk", request).await
    }
}

/// Map a decoded response onto the caller's result. A 401 drops the
/// session so every caller sees a consistent logged-out state; other
/// error statuses carry the body's `message` field when present.
fn settle<S: SessionStore>(session: &S, status: u16, body: Value) -> Result<Value, ApiError> {
    if status == 401 {
        session.clear();
        return Err(ApiError::Unauthorized);
    }

    if !(200..300).contains(&status) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(ApiError::Status { status, message });
    }

    Ok(body)
}

/// Unwrap the `{ "data": ... }` envelope most endpoints use, falling
/// back to the raw body for the ones that don't.
pub fn from_envelope<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    if let Some(data) = value.get("data") {
        if let Ok(parsed) = serde_json::from_value(data.clone()) {
            return Ok(parsed);
        }
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::MemoryStore;

    #[test]
    fn test_unauthorized_clears_session() {
        let store = MemoryStore::new();
        store.set_token("stale-token");
        store.set_user_json(r#"{"name":"Admin"}"#);

        let err = settle(&store, 401, Value::Null).unwrap_err();

        assert!(err.is_unauthorized());
        assert!(store.token().is_none());
        assert!(store.user_json().is_none());
    }

    #[test]
    fn test_error_status_keeps_session() {
        let store = MemoryStore::new();
        store.set_token("valid-token");

        let err = settle(&store, 404, json!({ "message": "Student not found" })).unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404, .. }));
        assert_eq!(err.user_message(), "Student not found");
        assert_eq!(store.token().as_deref(), Some("valid-token"));
    }

    #[test]
    fn test_success_passes_body_through() {
        let store = MemoryStore::new();
        let body = json!({ "data": { "id": "s1" } });
        assert_eq!(settle(&store, 200, body.clone()).unwrap(), body);
    }

    #[test]
    fn test_envelope_unwraps_data() {
        let body = json!({ "data": [{ "id": "f1", "amount": 5000 }] });
        let fees: Vec<Fee> = from_envelope(body).unwrap();
        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].amount, 5000.0);
    }

    #[test]
    fn test_envelope_falls_back_to_raw_body() {
        let body = json!([{ "id": "f1", "amount": 5000 }]);
        let fees: Vec<Fee> = from_envelope(body).unwrap();
        assert_eq!(fees.len(), 1);
    }

    #[test]
    fn test_envelope_ignores_mismatched_data_field() {
        // Some endpoints carry a scalar `data`; the typed fallback on the
        // raw body must still be attempted.
        let body = json!({ "data": true, "successful": 2, "failed": 1, "total": 3 });
        let summary: crate::models::BulkSummary = from_envelope(body).unwrap();
        assert_eq!(summary.successful, 2);
    }

    #[test]
    fn test_envelope_decode_error_is_reported() {
        let body = json!({ "unexpected": "shape" });
        let err = from_envelope::<Vec<Fee>>(body).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
