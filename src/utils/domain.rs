//! Domain normalization and hostname validation.
//!
//! Normalization turns free-form user input (possibly a full URL) into a
//! bare lowercase hostname. It is a pure, total function: it never fails,
//! it only may produce a string that fails [`is_valid_domain`], which the
//! caller must check before using the value as a lookup key.

use regex::Regex;
use std::sync::LazyLock;

/// Hostname grammar: dot-separated labels of alphanumerics and hyphens,
/// ending in a label of at least two letters.
static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9]([a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}$").unwrap()
});

/// Maximum hostname length per RFC 1035.
const MAX_HOSTNAME_LEN: usize = 253;

/// Normalizes raw domain input to a bare lowercase hostname.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. A leading `http://` or `https://` scheme is stripped (case-insensitive)
/// 3. A leading `www.` prefix is stripped (case-insensitive)
/// 4. Everything from the first `/` on is dropped
/// 5. The result is lowercased
///
/// Empty or whitespace-only input yields the empty string.
///
/// # Examples
///
/// ```
/// use domain_rank::utils::domain::normalize_domain;
///
/// assert_eq!(normalize_domain("https://WWW.Example.com/path?q=1"), "example.com");
/// assert_eq!(normalize_domain("   "), "");
/// ```
pub fn normalize_domain(input: &str) -> String {
    let mut host = input.trim();

    for scheme in ["http://", "https://"] {
        if let Some(rest) = strip_prefix_ignore_case(host, scheme) {
            host = rest;
            break;
        }
    }

    if let Some(rest) = strip_prefix_ignore_case(host, "www.") {
        host = rest;
    }

    host = host.split('/').next().unwrap_or(host);

    host.to_ascii_lowercase()
}

/// Returns whether the normalized domain matches the hostname grammar.
pub fn is_valid_domain(domain: &str) -> bool {
    domain.len() <= MAX_HOSTNAME_LEN && HOSTNAME_RE.is_match(domain)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
