//! Short code derivation.
//!
//! Codes are content-addressed: the same URL always maps to the same code, so
//! repeated shortening requests converge on one record without any lookup by URL.

use md5::{Digest, Md5};

/// Number of hex characters kept from the digest.
pub const SHORT_CODE_LENGTH: usize = 8;

/// Derives the short code for a URL.
///
/// Hashes the UTF-8 bytes of `original_url` with MD5 and keeps the first
/// [`SHORT_CODE_LENGTH`] characters of the lowercase hex digest. The digest
/// algorithm and truncation must stay fixed: codes issued by earlier
/// deployments are stored under exactly this derivation.
///
/// # Examples
///
/// ```
/// use linkhash::utils::code_generator::derive_short_code;
///
/// let code = derive_short_code("https://example.com/page");
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, derive_short_code("https://example.com/page"));
/// ```
pub fn derive_short_code(original_url: &str) -> String {
    let digest = Md5::digest(original_url.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(SHORT_CODE_LENGTH);
    code
}

/// Returns true if `code` has the shape of a derived short code.
pub fn is_short_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, 'a'..='f'))
}
