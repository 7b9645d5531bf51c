//! The HTTP client.

use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::resource::Resource;

/// Deployed API host.
pub const DEFAULT_BASE_URL: &str = "https://medpulse-production.up.railway.app/api";

/// Generic JSON client for the MedPulse REST API.
///
/// All calls are sequential request/response pairs; there is no retry and
/// no queueing. A bearer token, when present, is attached to every
/// request.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    agent: ureq::Agent,
}

impl ApiClient {
    /// Client against the deployed host.
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Client against a custom host (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            agent: ureq::agent(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        tracing::debug!(method, path, "API request");
        let mut request = self
            .agent
            .request(method, &self.url(path))
            .set("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }
        request
    }

    fn send(&self, request: ureq::Request, body: Option<&Value>) -> Result<Value> {
        let result = match body {
            Some(body) => request.send_json(body.clone()),
            None => request.call(),
        };
        match result {
            Ok(response) => {
                let text = response.into_string()?;
                if text.is_empty() {
                    return Ok(Value::Null);
                }
                // Some endpoints answer success with non-JSON bodies;
                // treat those as empty rather than failing the call.
                Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
            }
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                Err(Error::Api {
                    status,
                    message: extract_message(&text, status),
                })
            }
            Err(other) => Err(Error::Transport(other.to_string())),
        }
    }

    /// List a resource collection.
    pub fn list(&self, resource: Resource) -> Result<Value> {
        self.send(self.request("GET", resource.list_path()), None)
    }

    /// List one page of a paged collection. Non-paged resources ignore
    /// the page number.
    pub fn list_page(&self, resource: Resource, page: u32) -> Result<Value> {
        if !resource.paged() {
            return self.list(resource);
        }
        let path = format!("{}?page={page}", resource.list_path());
        self.send(self.request("GET", &path), None)
    }

    /// Fetch a single item.
    pub fn get(&self, resource: Resource, id: u64) -> Result<Value> {
        let path = resource.item_path(id).ok_or(Error::Unsupported {
            resource: resource.name(),
            operation: "get",
        })?;
        self.send(self.request("GET", &path), None)
    }

    /// Create an item.
    pub fn create(&self, resource: Resource, body: &Value) -> Result<Value> {
        let path = resource.create_path().ok_or(Error::Unsupported {
            resource: resource.name(),
            operation: "create",
        })?;
        self.send(self.request("POST", path), Some(body))
    }

    /// Update an item. The API takes updates via POST.
    pub fn update(&self, resource: Resource, id: u64, body: &Value) -> Result<Value> {
        let path = resource.update_path(id).ok_or(Error::Unsupported {
            resource: resource.name(),
            operation: "update",
        })?;
        self.send(self.request("POST", &path), Some(body))
    }

    /// Delete an item.
    pub fn delete(&self, resource: Resource, id: u64) -> Result<Value> {
        let path = resource.delete_path(id).ok_or(Error::Unsupported {
            resource: resource.name(),
            operation: "delete",
        })?;
        self.send(self.request("DELETE", &path), None)
    }

    /// Authenticate, returning the API's user-and-token payload.
    pub fn login(&self, email: &str, password: &str) -> Result<Value> {
        let body = json!({ "email": email, "password": password });
        self.send(self.request("POST", "login"), Some(&body))
    }

    /// Submit a public contact-form entry.
    pub fn submit_contact(&self, body: &Value) -> Result<Value> {
        self.create(Resource::ContactForms, body)
    }
}

/// Prefer the server's JSON `message` field; fall back to the raw body,
/// then to the bare status.
fn extract_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if body.is_empty() {
        format!("API error: {status}")
    } else {
        body.to_string()
    }
}
