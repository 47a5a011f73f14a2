//! Host, domain, port and protocol derivation.

use crate::adapter::RequestAdapter;
use crate::env::keys;

use super::RequestView;

impl<A: RequestAdapter> RequestView<A> {
    /// The domain part of the host, e.g. `"example.org"` for
    /// `"www.example.org"`. Pass a `tld_length` of 2 to keep two-label
    /// TLDs together, e.g. `"example.co.uk"` for `"www.example.co.uk"`.
    /// A host with fewer labels than requested returns what is available.
    pub fn domain(&self, tld_length: usize) -> String {
        let host = self.host();
        let labels: Vec<&str> = host.split('.').collect();
        let keep = (tld_length + 1).min(labels.len());
        labels[labels.len() - keep..].join(".")
    }

    /// All host labels before the domain, e.g. `["dev", "www"]` for
    /// `"dev.www.example.org"`. Empty when the host has too few labels.
    pub fn subdomains(&self, tld_length: usize) -> Vec<String> {
        let host = self.host();
        let labels: Vec<&str> = host.split('.').collect();
        let cut = labels.len().saturating_sub(tld_length + 1);
        labels[..cut].iter().map(|s| s.to_string()).collect()
    }

    /// `"https://"` when the SSL indicator flag is on, else `"http://"`.
    pub fn protocol(&self) -> &'static str {
        if self.env().get(keys::HTTPS) == Some("on") {
            "https://"
        } else {
            "http://"
        }
    }

    /// Is this an SSL request? Strictly derived from [`Self::protocol`].
    pub fn is_ssl(&self) -> bool {
        self.protocol() == "https://"
    }

    /// The server port, best-effort parsed; non-numeric values are 0.
    pub fn port(&self) -> u16 {
        self.env()
            .get(keys::SERVER_PORT)
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }

    /// `":8080"`-style suffix, empty when the port is the protocol default
    /// (80 for http, 443 for https).
    pub fn port_suffix(&self) -> String {
        let default = (self.protocol() == "http://" && self.port() == 80)
            || (self.protocol() == "https://" && self.port() == 443);
        if default {
            String::new()
        } else {
            format!(":{}", self.port())
        }
    }

    /// A `host:port` string: the explicit Host header when present, else
    /// the adapter host plus the port suffix.
    pub fn host_with_port(&self) -> String {
        match self.env().get(keys::HTTP_HOST) {
            Some(host) => host.to_string(),
            None => format!("{}{}", self.host(), self.port_suffix()),
        }
    }
}
