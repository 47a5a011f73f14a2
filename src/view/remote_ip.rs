//! Originating client IP resolution.
//!
//! # Responsibilities
//! - Apply the proxy trust order: client-IP override, then forwarded-for
//!   chain, then the direct peer address
//! - Filter unknown and RFC1918 private entries out of the proxy chain
//!
//! # Design Decisions
//! - The client-IP header is trusted verbatim, no validation
//! - Private-range matching is textual prefix matching, no address parsing
//!   and no regex, so resolution stays O(n) over the header
//! - A chain with only filtered entries falls back to the peer address and
//!   logs a warning: it usually means a misconfigured proxy

use crate::adapter::RequestAdapter;
use crate::env::keys;

use super::RequestView;

/// True for chain entries that carry no routable client address:
/// the literal `unknown` and the RFC1918 private ranges
/// 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16, matched textually.
fn is_private_or_unknown(entry: &str) -> bool {
    if entry.eq_ignore_ascii_case("unknown") {
        return true;
    }
    if entry.starts_with("10.") || entry.starts_with("192.168.") {
        return true;
    }
    if let Some(rest) = entry.strip_prefix("172.") {
        let bytes = rest.as_bytes();
        if bytes.len() >= 3 && bytes[2] == b'.' {
            if let Ok(octet) = rest[..2].parse::<u8>() {
                return (16..=31).contains(&octet);
            }
        }
    }
    false
}

impl<A: RequestAdapter> RequestView<A> {
    /// The originating client IP.
    ///
    /// The direct peer address is wrong when the client sits behind
    /// proxies, so proxy-supplied headers are consulted first: an explicit
    /// client-IP override wins outright, then the first public entry of the
    /// forwarded-for chain (closest to the client), then the peer address.
    pub fn remote_ip(&self) -> Option<String> {
        if let Some(ip) = self.env().get(keys::HTTP_CLIENT_IP) {
            return Some(ip.to_string());
        }

        if let Some(chain) = self.env().get(keys::HTTP_X_FORWARDED_FOR) {
            let first_public = chain
                .split(',')
                .map(str::trim)
                .find(|entry| !is_private_or_unknown(entry));
            match first_public {
                Some(ip) => return Some(ip.to_string()),
                None => {
                    tracing::warn!(
                        forwarded_for = %chain,
                        "Forwarded-for chain contains only private/unknown entries, \
                         falling back to peer address"
                    );
                }
            }
        }

        self.env().get(keys::REMOTE_ADDR).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StaticRequest;
    use crate::env::Environment;

    fn view_of(entries: &[(&str, &str)]) -> RequestView<StaticRequest> {
        let env = entries.iter().copied().collect::<Environment>();
        RequestView::new(StaticRequest::new(env))
    }

    #[test]
    fn test_client_ip_wins_verbatim() {
        let view = view_of(&[
            (keys::HTTP_CLIENT_IP, "1.2.3.4"),
            (keys::HTTP_X_FORWARDED_FOR, "5.6.7.8"),
            (keys::REMOTE_ADDR, "9.9.9.9"),
        ]);
        assert_eq!(view.remote_ip().as_deref(), Some("1.2.3.4"));
    }

    #[test]
    fn test_forwarded_for_filters_private_entries() {
        let view = view_of(&[
            (keys::HTTP_X_FORWARDED_FOR, "10.0.0.1, 5.6.7.8"),
            (keys::REMOTE_ADDR, "9.9.9.9"),
        ]);
        assert_eq!(view.remote_ip().as_deref(), Some("5.6.7.8"));
    }

    #[test]
    fn test_forwarded_for_filters_unknown() {
        let view = view_of(&[
            (keys::HTTP_X_FORWARDED_FOR, "unknown, UNKNOWN, 3.4.5.6"),
            (keys::REMOTE_ADDR, "9.9.9.9"),
        ]);
        assert_eq!(view.remote_ip().as_deref(), Some("3.4.5.6"));
    }

    #[test]
    fn test_fully_filtered_chain_falls_back_to_peer() {
        let view = view_of(&[
            (keys::HTTP_X_FORWARDED_FOR, "10.0.0.1"),
            (keys::REMOTE_ADDR, "9.9.9.9"),
        ]);
        assert_eq!(view.remote_ip().as_deref(), Some("9.9.9.9"));
    }

    #[test]
    fn test_peer_address_without_proxy_headers() {
        let direct = view_of(&[(keys::REMOTE_ADDR, "8.8.8.8")]);
        assert_eq!(direct.remote_ip().as_deref(), Some("8.8.8.8"));
        assert_eq!(view_of(&[]).remote_ip(), None);
    }

    #[test]
    fn test_private_range_boundaries() {
        assert!(is_private_or_unknown("10.1.2.3"));
        assert!(is_private_or_unknown("192.168.0.1"));
        assert!(is_private_or_unknown("172.16.0.1"));
        assert!(is_private_or_unknown("172.31.255.255"));
        assert!(!is_private_or_unknown("172.15.0.1"));
        assert!(!is_private_or_unknown("172.32.0.1"));
        assert!(!is_private_or_unknown("172.160.0.1"));
        assert!(!is_private_or_unknown("11.0.0.1"));
        assert!(!is_private_or_unknown("192.169.0.1"));
    }

    #[test]
    fn test_chain_entries_are_trimmed() {
        let view = view_of(&[(keys::HTTP_X_FORWARDED_FOR, " unknown , 7.7.7.7 ")]);
        assert_eq!(view.remote_ip().as_deref(), Some("7.7.7.7"));
    }
}
