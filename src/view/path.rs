//! Request URI and path normalization.
//!
//! # Responsibilities
//! - Normalize the request URI across server implementations (some embed
//!   the absolute `scheme://host` form, some leave it empty entirely)
//! - Detect the application mount point from the script path
//! - Derive the effective path relative to the mount point
//!
//! # Design Decisions
//! - The mount-point override from [`crate::config::ViewConfig`] wins over
//!   auto-detection, which fires only for apache-style deployments
//! - Root stripping is by prefix length; a root longer than the path
//!   clamps to the empty string rather than failing

use crate::adapter::RequestAdapter;
use crate::env::keys;

use super::RequestView;

/// Directory portion of a slash-separated script path.
fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Strip a leading `scheme://authority` from an absolute request URI,
/// keeping the path-and-query remainder. A URI without that prefix is
/// returned unchanged; an absolute URI with no path yields `""`.
fn strip_absolute_prefix(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    let scheme_ok = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !scheme_ok {
        return uri.to_string();
    }
    match rest.find('/') {
        // Empty authority: not the absolute form, leave untouched.
        Some(0) => uri.to_string(),
        Some(idx) => rest[idx..].to_string(),
        None if rest.is_empty() => uri.to_string(),
        None => String::new(),
    }
}

impl<A: RequestAdapter> RequestView<A> {
    /// Lower-cased name of the serving software, e.g. `"apache"` from
    /// `"Apache/2.4.57"`. `None` when the environment does not say or the
    /// string has no leading alphabetic run.
    pub fn server_software(&self) -> Option<String> {
        let software = self.env().get(keys::SERVER_SOFTWARE)?;
        let tag: String = software
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();
        if tag.is_empty() {
            None
        } else {
            Some(tag.to_ascii_lowercase())
        }
    }

    /// The mount-point prefix under which the application is deployed.
    ///
    /// The config override, when set, applies to every request. Otherwise
    /// the directory portion of the script path is detected, only for
    /// apache deployments (other servers hand a usable PATH_INFO already).
    /// Memoized per view.
    pub fn relative_url_root(&self) -> Option<&str> {
        self.relative_url_root
            .get_or_init(|| {
                if let Some(root) = &self.config().relative_url_root {
                    return Some(root.clone());
                }
                if self.server_software().as_deref() != Some("apache") {
                    return None;
                }
                let script = self.env().get(keys::SCRIPT_NAME).unwrap_or("");
                let root = match dirname(script) {
                    "." | "/" => "",
                    dir => dir,
                };
                tracing::debug!(script_name = %script, root = %root, "Detected mount point");
                Some(root.to_string())
            })
            .as_deref()
    }

    /// The request URI, normalized to its path-and-query form.
    ///
    /// Prefers the environment's full request URI, stripping the absolute
    /// `scheme://host` prefix some servers embed. When absent, the URI is
    /// reconstructed from PATH_INFO (minus a duplicated script filename
    /// segment) and the query string.
    pub fn request_uri(&self) -> Option<String> {
        if let Some(uri) = self.env().get(keys::REQUEST_URI) {
            return Some(strip_absolute_prefix(uri));
        }

        let mut uri = self.env().get(keys::PATH_INFO)?.to_string();
        let script = self.env().get(keys::SCRIPT_NAME).unwrap_or("");
        if let Some(filename) = script.rsplit('/').next().filter(|f| !f.is_empty()) {
            let duplicated = format!("{filename}/");
            if let Some(pos) = uri.find(&duplicated) {
                uri.replace_range(pos..pos + duplicated.len(), "");
            }
        }
        if let Some(query) = self.env().get(keys::QUERY_STRING).filter(|q| !q.is_empty()) {
            uri.push('?');
            uri.push_str(query);
        }
        Some(uri)
    }

    /// The requested path relative to the application mount point.
    ///
    /// The query string is dropped, then the mount-point prefix is removed
    /// by length. A root longer than the path clamps to the empty string.
    pub fn path(&self) -> String {
        let path = match self.request_uri() {
            Some(uri) => uri
                .split('?')
                .next()
                .unwrap_or_default()
                .to_string(),
            None => String::new(),
        };

        match self.relative_url_root() {
            Some(root) => path.get(root.len()..).unwrap_or("").to_string(),
            None => path,
        }
    }
}
