//! GitHub-backed blob store.
//!
//! The configuration blob is a single file in a GitHub repository. Reads
//! go through the raw-content host (no credentials, cache-busted); version
//! metadata and commits go through the contents API, which enforces the
//! compare-and-swap on the file sha.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use regex::Regex;
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::store::{BlobMeta, BlobStore};

/// Default blob path within the repository.
pub const DEFAULT_PATH: &str = "siteconfig.json";

/// Default published branch.
pub const DEFAULT_BRANCH: &str = "main";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

static OWNER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,38})$").unwrap());
static REPO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{1,100}$").unwrap());

/// Blob store backed by a GitHub repository file.
pub struct GitHubStore {
    owner: String,
    repo: String,
    branch: String,
    path: String,
    token: Option<String>,
    agent: ureq::Agent,
}

impl GitHubStore {
    /// Create a store for `owner/repo`, targeting the default branch and
    /// blob path.
    ///
    /// The token is required only for [`metadata`]/[`put`]; raw fetches
    /// are unauthenticated.
    ///
    /// [`metadata`]: BlobStore::metadata
    /// [`put`]: BlobStore::put
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let owner = owner.into();
        let repo = repo.into();
        if !OWNER_PATTERN.is_match(&owner) {
            return Err(Error::InvalidCoordinate { name: owner });
        }
        if !REPO_PATTERN.is_match(&repo) {
            return Err(Error::InvalidCoordinate { name: repo });
        }
        Ok(Self {
            owner,
            repo,
            branch: DEFAULT_BRANCH.to_string(),
            path: DEFAULT_PATH.to_string(),
            token,
            agent: ureq::agent(),
        })
    }

    /// Override branch and blob path.
    pub fn with_location(mut self, branch: impl Into<String>, path: impl Into<String>) -> Self {
        self.branch = branch.into();
        self.path = path.into();
        self
    }

    fn raw_url(&self) -> String {
        // Cache-busted per call so a just-published config is visible
        // immediately despite the raw host's CDN.
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}?v={}",
            self.owner,
            self.repo,
            self.branch,
            self.path,
            Utc::now().timestamp_millis()
        )
    }

    fn contents_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}",
            self.owner, self.repo, self.path
        )
    }

    /// Metadata reads must pin the configured branch: without `ref` the
    /// contents API serves the repository's default branch, and the CAS
    /// token would come from the wrong version of the file.
    fn metadata_url(&self) -> String {
        format!("{}?ref={}", self.contents_url(), self.branch)
    }

    fn authed(&self, request: ureq::Request) -> ureq::Request {
        match &self.token {
            Some(token) => request.set("Authorization", &format!("token {token}")),
            None => request,
        }
    }

    fn map_error(&self, err: ureq::Error) -> Error {
        match err {
            ureq::Error::Status(404, _) => Error::NotFound {
                path: format!("{}/{}/{}", self.owner, self.repo, self.path),
            },
            ureq::Error::Status(status, response) => Error::Http {
                status,
                message: response.into_string().unwrap_or_default(),
            },
            other => Error::Transport(other.to_string()),
        }
    }
}

impl BlobStore for GitHubStore {
    fn fetch_raw(&self) -> Result<String> {
        let url = self.raw_url();
        tracing::debug!(%url, "Fetching raw configuration blob");
        let response = self.agent.get(&url).call().map_err(|e| self.map_error(e))?;
        Ok(response.into_string()?)
    }

    fn metadata(&self) -> Result<BlobMeta> {
        let url = self.metadata_url();
        tracing::debug!(%url, "Reading blob metadata");
        let response = self
            .authed(self.agent.get(&url).set("Accept", ACCEPT_HEADER))
            .call()
            .map_err(|e| self.map_error(e))?;

        let body: Value = response.into_json()?;
        let sha = body
            .get("sha")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::UnexpectedResponse {
                message: "metadata response has no sha".to_string(),
            })?;
        Ok(BlobMeta {
            sha: sha.to_string(),
        })
    }

    fn put(&self, content: &str, expected_sha: &str, message: &str) -> Result<String> {
        let url = self.contents_url();
        tracing::debug!(%url, expected_sha, "Committing configuration blob");

        let body = json!({
            "message": message,
            "content": BASE64.encode(content.as_bytes()),
            "sha": expected_sha,
            "branch": self.branch,
        });

        let response = self
            .authed(self.agent.put(&url).set("Accept", ACCEPT_HEADER))
            .send_json(body)
            .map_err(|e| match e {
                // GitHub rejects a stale sha with 409 (or 422 on some
                // paths); both mean the CAS failed atomically.
                ureq::Error::Status(409 | 422, _) => Error::Conflict {
                    expected: expected_sha.to_string(),
                },
                other => self.map_error(other),
            })?;

        let body: Value = response.into_json()?;
        let sha = body
            .pointer("/content/sha")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::UnexpectedResponse {
                message: "commit response has no content.sha".to_string(),
            })?;
        Ok(sha.to_string())
    }
}
