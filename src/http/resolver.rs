//! Maps a request target onto the document root.

use crate::http::mime::ContentType;
use std::path::{Component, Path, PathBuf};

/// Outcome of resolving one request target.
///
/// Computed once per connection; both the header and the body are derived
/// from the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// The target was exactly `/`.
    Root,
    /// A regular file under the document root.
    Found { path: PathBuf, extension: String },
    /// Nothing servable. `path` is the lookup path, if one was built.
    Missing { path: Option<PathBuf> },
}

impl Resource {
    pub fn content_type(&self) -> ContentType {
        match self {
            Resource::Found { extension, .. } => ContentType::from_extension(extension),
            Resource::Root | Resource::Missing { .. } => ContentType::Html,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resource::Missing { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a request target. `None` stands for a malformed request and
    /// always resolves to `Missing`.
    pub async fn resolve(&self, target: Option<&str>) -> Resource {
        let Some(target) = target else {
            return Resource::Missing { path: None };
        };

        if target == "/" {
            return Resource::Root;
        }

        let Some(relative) = sanitize_target(target) else {
            tracing::warn!(target = %target, "Rejected request target");
            return Resource::Missing { path: None };
        };

        let path = self.root.join(relative);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {
                let extension = path
                    .file_name()
                    .map(|name| extension_of(&name.to_string_lossy()).to_string())
                    .unwrap_or_default();
                Resource::Found { path, extension }
            }
            _ => Resource::Missing { path: Some(path) },
        }
    }
}

/// Turns a request target into a path relative to the document root.
///
/// Leading slashes, the query string and any fragment are dropped. Targets
/// that would escape the root (`..`, drive prefixes) or that name nothing
/// are rejected.
pub fn sanitize_target(target: &str) -> Option<PathBuf> {
    let target = target.split(['?', '#']).next().unwrap_or_default();
    let target = target.trim_start_matches('/');

    let mut relative = PathBuf::new();
    for component in Path::new(target).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(relative)
}

/// Text after the last `.` of a file name. Empty when there is no dot or the
/// only dot starts the name (`.hidden`).
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &file_name[idx + 1..],
    }
}
