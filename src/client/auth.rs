//! Master-key request signing for the Cosmos DB SQL REST API.
//!
//! Every request carries an `authorization` token derived from the
//! account's base64 master key: an HMAC-SHA256 over the verb, resource
//! type, resource link and a lowercase RFC 1123 date. The same date
//! string must be sent verbatim as `x-ms-date`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{DemoError, DemoResult};

type HmacSha256 = Hmac<Sha256>;

/// Decoded account master key.
#[derive(Debug)]
pub struct MasterKey {
    key: Vec<u8>,
}

impl MasterKey {
    pub fn from_base64(key: &str) -> DemoResult<Self> {
        let key = BASE64
            .decode(key)
            .map_err(|e| DemoError::AuthError(format!("Invalid master key: {}", e)))?;
        Ok(Self { key })
    }

    /// Build the URL-encoded `type=master&ver=1.0&sig=...` token for one
    /// request. The signed payload is
    /// `{verb}\n{resource_type}\n{resource_link}\n{date}\n\n` with verb,
    /// resource type and date lowercased.
    pub fn sign(
        &self,
        verb: &str,
        resource_type: &str,
        resource_link: &str,
        date: &str,
    ) -> DemoResult<String> {
        let payload = format!(
            "{}\n{}\n{}\n{}\n\n",
            verb.to_lowercase(),
            resource_type.to_lowercase(),
            resource_link,
            date.to_lowercase()
        );

        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| DemoError::AuthError(format!("HMAC init failed: {}", e)))?;
        mac.update(payload.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        let token = format!("type=master&ver=1.0&sig={}", signature);
        Ok(url::form_urlencoded::byte_serialize(token.as_bytes()).collect())
    }
}

/// Current UTC time in the lowercase RFC 1123 form the signature scheme
/// expects.
pub fn rfc1123_date() -> String {
    Utc::now()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
        .to_lowercase()
}
