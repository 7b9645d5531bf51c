//! Resource path table for the MedPulse REST API.
//!
//! The API's routes are conventional but not uniform: some resources
//! create under `create-<name>`, updates go through POST, and a few
//! operations simply do not exist. The table below encodes the routes as
//! deployed; `None` means the API has no such endpoint.
//!
//! The deployed API additionally exposes media upload (`image`/`video`),
//! the `front-settings`/`home-settings`/`static-content` singletons,
//! `event-analysis`, and author attach/detach. This client does not model
//! them: the uploads are multipart, and the rest do not fit the uniform
//! list/get/create/update/delete contract below.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The resources the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Events,
    Articles,
    Experts,
    Authors,
    Categories,
    ContactForms,
    Users,
    Roles,
    Permissions,
}

impl Resource {
    /// All resources, for iteration in tests and tooling.
    pub const ALL: [Resource; 9] = [
        Resource::Events,
        Resource::Articles,
        Resource::Experts,
        Resource::Authors,
        Resource::Categories,
        Resource::ContactForms,
        Resource::Users,
        Resource::Roles,
        Resource::Permissions,
    ];

    /// Human-readable name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Events => "events",
            Resource::Articles => "articles",
            Resource::Experts => "experts",
            Resource::Authors => "authors",
            Resource::Categories => "categories",
            Resource::ContactForms => "contact forms",
            Resource::Users => "users",
            Resource::Roles => "roles",
            Resource::Permissions => "permissions",
        }
    }

    /// Collection listing path.
    pub fn list_path(&self) -> &'static str {
        match self {
            Resource::Events => "events",
            Resource::Articles => "articles",
            Resource::Experts => "experts/",
            Resource::Authors => "authors/",
            Resource::Categories => "article-categories/",
            Resource::ContactForms => "contact-form",
            Resource::Users => "users/",
            Resource::Roles => "roles/",
            Resource::Permissions => "permissions/",
        }
    }

    /// Whether listing accepts a `page` query parameter.
    pub fn paged(&self) -> bool {
        matches!(
            self,
            Resource::Events | Resource::Articles | Resource::ContactForms
        )
    }

    /// Single-item fetch path.
    pub fn item_path(&self, id: u64) -> Option<String> {
        match self {
            Resource::Events => Some(format!("event/{id}")),
            Resource::Articles => Some(format!("article/{id}")),
            _ => None,
        }
    }

    /// Creation path.
    pub fn create_path(&self) -> Option<&'static str> {
        match self {
            Resource::Events => Some("event"),
            Resource::Articles => Some("create-article"),
            Resource::Experts => Some("expert"),
            Resource::Authors => Some("create-author"),
            Resource::Categories => Some("create-category"),
            Resource::ContactForms => Some("contact-form"),
            Resource::Users => Some("create-user"),
            Resource::Roles => Some("create-role"),
            Resource::Permissions => None,
        }
    }

    /// Update path. The API updates via POST to these routes.
    pub fn update_path(&self, id: u64) -> Option<String> {
        match self {
            Resource::Events => Some(format!("event/{id}")),
            Resource::Articles => Some(format!("article/{id}")),
            Resource::Experts => Some(format!("expert/{id}")),
            Resource::Authors => Some(format!("author/{id}")),
            Resource::Categories => Some(format!("article-category/{id}")),
            Resource::Users => Some(format!("update-user/{id}")),
            Resource::ContactForms | Resource::Roles | Resource::Permissions => None,
        }
    }

    /// Deletion path.
    pub fn delete_path(&self, id: u64) -> Option<String> {
        match self {
            Resource::Events => Some(format!("event/{id}")),
            Resource::Articles => Some(format!("article/{id}")),
            Resource::Experts => Some(format!("expert/{id}")),
            Resource::Authors => Some(format!("author/{id}")),
            Resource::Categories => Some(format!("article-category/{id}")),
            Resource::Users => Some(format!("user/{id}")),
            Resource::Roles => Some(format!("role/{id}")),
            Resource::ContactForms | Resource::Permissions => None,
        }
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "events" | "event" => Ok(Resource::Events),
            "articles" | "article" => Ok(Resource::Articles),
            "experts" | "expert" => Ok(Resource::Experts),
            "authors" | "author" => Ok(Resource::Authors),
            "categories" | "category" => Ok(Resource::Categories),
            "contact-forms" | "contact-form" => Ok(Resource::ContactForms),
            "users" | "user" => Ok(Resource::Users),
            "roles" | "role" => Ok(Resource::Roles),
            "permissions" | "permission" => Ok(Resource::Permissions),
            _ => Err(Error::UnknownResource { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
