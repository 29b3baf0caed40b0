//! CSRF token handling.
//!
//! The server issues its CSRF token as a cookie and expects it back in a
//! request header on every state-changing request.

use percent_encoding::percent_decode_str;

/// Name of the cookie carrying the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the server reads the CSRF token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Extracts a cookie value from a `Cookie` header string.
///
/// Cookies are separated by `;`; surrounding whitespace is ignored and the
/// first cookie whose name matches wins. The value is percent-decoded; a
/// value that does not decode to UTF-8 is returned undecoded.
pub fn token_from_cookies(cookie_header: &str, name: &str) -> Option<String> {
    if cookie_header.trim().is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|raw| match percent_decode_str(raw).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}
