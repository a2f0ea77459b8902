//! Anonymous visitor identity carried in a continuity cookie.
//!
//! The gateway recognizes a returning browser through an opaque token held
//! client-side in a cookie; nothing is stored server-side. Resolution is a
//! pure function of the inbound `Cookie` header: either the presented token
//! is echoed back as the identity, or a fresh one is minted and handed to
//! the caller for attachment to the outbound response.
//!
//! Calling twice with no presented token mints two different identities.
//! That is intentional: continuity is the browser's responsibility.

use uuid::Uuid;

/// Fixed name of the continuity cookie.
pub const COOKIE_NAME: &str = "chatkit_session_id";

/// Cookie lifetime: 30 days.
pub const COOKIE_MAX_AGE_SECONDS: u64 = 60 * 60 * 24 * 30;

/// Outcome of identity resolution for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// The visitor identity to scope this request to.
    pub visitor_id: String,
    /// Serialized `Set-Cookie` value, present only when a fresh identity
    /// had to be minted. The caller attaches it to the response -- on error
    /// responses too, so retries don't re-mint identity indefinitely.
    pub minted_cookie: Option<String>,
}

/// Resolve the visitor identity from an inbound `Cookie` header.
///
/// If the header carries a non-empty continuity cookie its value is the
/// identity verbatim and no cookie is emitted. Otherwise a new
/// cryptographically random identity is minted together with its serialized
/// cookie. Malformed headers degrade to "not found" rather than failing.
pub fn resolve(cookie_header: Option<&str>, secure: bool) -> ResolvedIdentity {
    if let Some(token) = parse_cookie_header(cookie_header) {
        return ResolvedIdentity {
            visitor_id: token.to_string(),
            minted_cookie: None,
        };
    }

    let id = Uuid::new_v4().to_string();
    let cookie = serialize_cookie(&id, secure);
    ResolvedIdentity {
        visitor_id: id,
        minted_cookie: Some(cookie),
    }
}

/// Find the continuity cookie's value in a raw `Cookie` header.
///
/// Splits on `;`, matching the trimmed key against [`COOKIE_NAME`]
/// case-sensitively. Empty values count as not found.
pub fn parse_cookie_header(header: Option<&str>) -> Option<&str> {
    let header = header?;
    for part in header.split(';') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        if key.trim() == COOKIE_NAME && !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// Serialize a `Set-Cookie` value for a freshly minted identity.
///
/// Attributes: path `/`, 30-day max-age, http-only, lax same-site, and
/// `Secure` when secure cookies are enabled (the production default).
pub fn serialize_cookie(id: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{COOKIE_NAME}={id}; Path=/; Max-Age={COOKIE_MAX_AGE_SECONDS}; HttpOnly; SameSite=Lax"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
