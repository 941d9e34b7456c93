//! Keyed signature algorithms shared by providers.

use std::fmt::{Debug, Formatter};

use crate::hash::{hmac_sha1, hmac_sha256};
use crate::{ComputeSignature, Result};

/// HMAC-SHA1 keyed with the provider secret.
///
/// Used by S3 header signing and presigned URLs.
#[derive(Clone)]
pub struct HmacSha1 {
    key: Vec<u8>,
}

impl HmacSha1 {
    /// Create a new HMAC-SHA1 signer from raw key bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }
}

impl Debug for HmacSha1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha1").finish_non_exhaustive()
    }
}

impl ComputeSignature for HmacSha1 {
    fn compute_signature(&self, content: &[u8]) -> Result<Vec<u8>> {
        Ok(hmac_sha1(&self.key, content))
    }
}

/// HMAC-SHA256 keyed with the provider secret.
///
/// Used by the EC2 query API and Azure SharedKey.
#[derive(Clone)]
pub struct HmacSha256 {
    key: Vec<u8>,
}

impl HmacSha256 {
    /// Create a new HMAC-SHA256 signer from raw key bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }
}

impl Debug for HmacSha256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha256").finish_non_exhaustive()
    }
}

impl ComputeSignature for HmacSha256 {
    fn compute_signature(&self, content: &[u8]) -> Result<Vec<u8>> {
        Ok(hmac_sha256(&self.key, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_key() {
        let alg = HmacSha1::new("super-secret-key");
        assert!(!format!("{alg:?}").contains("super-secret-key"));
    }

    #[test]
    fn test_deterministic() {
        let alg = HmacSha256::new("key");
        let a = alg.compute_signature(b"content").unwrap();
        let b = alg.compute_signature(b"content").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, alg.compute_signature(b"other").unwrap());
    }
}
