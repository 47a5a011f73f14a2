//! Body-format classification and ajax detection.
//!
//! # Design Decisions
//! - The legacy format-override header always wins over content-type
//!   sniffing (backward-compatibility escape hatch)
//! - Classification is meaningful only for POST bodies; a non-POST request
//!   with an XML content-type is never a "formatted post"
//! - Missing headers classify as url-encoded, never as an error

use crate::adapter::RequestAdapter;
use crate::env::keys;

use super::RequestView;

/// Classified format of a POST body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFormat {
    Xml,
    Yaml,
    UrlEncoded,
    /// Format named by the legacy override header but not in the table.
    Other(String),
}

impl PostFormat {
    /// Classify a lower-cased format tag from the override header.
    fn from_tag(tag: &str) -> Self {
        match tag {
            "xml" => PostFormat::Xml,
            "yaml" => PostFormat::Yaml,
            "url_encoded" => PostFormat::UrlEncoded,
            other => PostFormat::Other(other.to_string()),
        }
    }

    /// Classify a content-type header value, case-insensitively.
    fn from_content_type(content_type: &str) -> Self {
        match content_type.to_ascii_lowercase().as_str() {
            "application/xml" | "text/xml" => PostFormat::Xml,
            "application/x-yaml" | "text/x-yaml" => PostFormat::Yaml,
            _ => PostFormat::UrlEncoded,
        }
    }
}

impl<A: RequestAdapter> RequestView<A> {
    /// The classified body format.
    ///
    /// The legacy `X-Post-Data-Format` header, when present, is used
    /// verbatim (lower-cased); otherwise the content-type header is
    /// matched against the fixed classification table.
    pub fn post_format(&self) -> PostFormat {
        if let Some(tag) = self.env().get(keys::HTTP_X_POST_DATA_FORMAT) {
            return PostFormat::from_tag(&tag.to_ascii_lowercase());
        }
        PostFormat::from_content_type(self.env().get(keys::CONTENT_TYPE).unwrap_or(""))
    }

    /// Is this a POST request formatted as XML or YAML?
    pub fn is_formatted_post(&self) -> bool {
        self.is_post()
            && matches!(self.post_format(), PostFormat::Xml | PostFormat::Yaml)
    }

    /// Is this a POST request formatted as XML?
    pub fn is_xml_post(&self) -> bool {
        self.is_post() && self.post_format() == PostFormat::Xml
    }

    /// Is this a POST request formatted as YAML?
    pub fn is_yaml_post(&self) -> bool {
        self.is_post() && self.post_format() == PostFormat::Yaml
    }

    /// True when the `X-Requested-With` header names `XMLHttpRequest`,
    /// the marker browser ajax libraries send with every request.
    pub fn is_xml_http_request(&self) -> bool {
        self.env()
            .get(keys::HTTP_X_REQUESTED_WITH)
            .map(|v| v.to_ascii_lowercase().contains("xmlhttprequest"))
            .unwrap_or(false)
    }

    /// Shorthand for [`Self::is_xml_http_request`].
    pub fn is_xhr(&self) -> bool {
        self.is_xml_http_request()
    }
}
