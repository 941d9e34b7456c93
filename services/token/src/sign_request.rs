use http::HeaderName;
use log::debug;

use cloudreq_core::time::DateTime;
use cloudreq_core::{
    Authorization, CanonicalRequest, Error, Result, SignRequest, SigningMethod, SigningRequest,
};

use crate::{Credential, TokenScheme};

/// RequestSigner that attaches a session token to every request.
///
/// Nothing is computed: the token itself authenticates the request, so
/// presigned URLs are not supported.
#[derive(Debug)]
pub struct RequestSigner {
    scheme: TokenScheme,
}

impl RequestSigner {
    /// Create a signer for the given scheme.
    pub fn new(scheme: TokenScheme) -> Self {
        Self { scheme }
    }

    /// Signer for Rackspace CloudFiles.
    pub fn rackspace() -> Self {
        Self::new(TokenScheme::Rackspace)
    }

    /// Signer for vCloud and Terremark.
    pub fn vcloud() -> Self {
        Self::new(TokenScheme::VCloud)
    }

    /// Signer for bearer tokens.
    pub fn bearer() -> Self {
        Self::new(TokenScheme::Bearer)
    }

    /// The scheme this signer uses.
    pub fn scheme(&self) -> TokenScheme {
        self.scheme
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn required_headers(&self, _: SigningMethod) -> &[HeaderName] {
        &[]
    }

    fn prepare(
        &self,
        _: &mut SigningRequest,
        _: &Self::Credential,
        method: SigningMethod,
        _: DateTime,
    ) -> Result<()> {
        match method {
            SigningMethod::Header => Ok(()),
            SigningMethod::Query(_) => Err(Error::request_invalid(format!(
                "{:?} token can't be used in query string",
                self.scheme
            ))),
        }
    }

    fn sign(
        &self,
        cred: &Self::Credential,
        creq: &CanonicalRequest,
        _: SigningMethod,
    ) -> Result<Authorization> {
        debug!(
            "attaching {:?} token to {} {}{}",
            self.scheme, creq.method, creq.host, creq.path
        );
        Authorization::header(
            self.scheme.header_name(),
            &self.scheme.header_value(cred.token.trim()),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cloudreq_core::{ErrorKind, Signer};
    use pretty_assertions::assert_eq;

    use super::*;

    fn parts(uri: &str) -> http::request::Parts {
        http::Request::get(uri).body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_sign_rackspace() -> Result<()> {
        let signer = Signer::new(RequestSigner::rackspace());
        let signed = signer.sign(
            parts("https://storage.clouddrive.com/v1/MossoCloudFS_abc/photos"),
            &Credential::new("886d1a1f"),
        )?;

        let value = &signed.parts().headers["x-auth-token"];
        assert_eq!(value, "886d1a1f");
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn test_sign_bearer() -> Result<()> {
        let signer = Signer::new(RequestSigner::bearer());
        let signed = signer.sign(parts("https://api.example.com/v1/items"), &Credential::new("tok"))?;

        assert_eq!(signed.parts().headers["authorization"], "Bearer tok");
        Ok(())
    }

    #[test]
    fn test_presign_is_rejected() {
        let signer = Signer::new(RequestSigner::vcloud());
        let err = signer
            .presign(
                parts("https://services.vcloudexpress.terremark.com/api/v0.8/catalog/1"),
                &Credential::new("tok"),
                Duration::from_secs(60),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_empty_token() {
        let signer = Signer::new(RequestSigner::vcloud());
        let err = signer
            .sign(parts("https://vcloud.example.com/api/vApp/1"), &Credential::new(""))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
