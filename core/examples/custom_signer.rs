use async_trait::async_trait;
use cloudreq_core::hash::{base64_encode, hex_sha256};
use cloudreq_core::{
    Authorization, CanonicalRequest, Classifier, ComputeSignature, Context, ErrorFormat, Fallback,
    Failure, HmacSha256, OperationSpec, OperationTable, OutcomeKind, Pipeline, ProvideCredential,
    Result, SignRequest, Signer, SigningCredential, SigningMethod, StaticEnv,
};
use http::header::AUTHORIZATION;
use std::collections::HashMap;

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Load credentials from environment variables
#[derive(Debug)]
struct MyCredentialLoader;

#[async_trait]
impl ProvideCredential for MyCredentialLoader {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(api_key), Some(api_secret)) =
            (ctx.env_var("MY_API_KEY"), ctx.env_var("MY_API_SECRET"))
        else {
            return Ok(None);
        };

        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// A signer that covers method, path and body hash
#[derive(Debug)]
struct MyRequestSigner;

impl SignRequest for MyRequestSigner {
    type Credential = MyCredential;

    fn sign(
        &self,
        cred: &Self::Credential,
        creq: &CanonicalRequest,
        _: SigningMethod,
    ) -> Result<Authorization> {
        let string_to_sign = format!(
            "{}\n{}\n{}",
            creq.method,
            creq.path,
            creq.header_or_default("x-content-sha256")
        );
        let signature = HmacSha256::new(cred.api_secret.as_bytes())
            .compute_signature(string_to_sign.as_bytes())?;

        Authorization::header(
            AUTHORIZATION,
            &format!("MY-HMAC {}:{}", cred.api_key, base64_encode(&signature)),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv {
        home_dir: None,
        envs: HashMap::from([
            ("MY_API_KEY".to_string(), "demo-api-key".to_string()),
            ("MY_API_SECRET".to_string(), "demo-api-secret".to_string()),
        ]),
    });

    let Some(cred) = MyCredentialLoader.provide_credential(&ctx).await? else {
        println!("no credential found");
        return Ok(());
    };

    let table = OperationTable::new(Classifier::default(), ErrorFormat::Json).with_operation(
        OperationSpec::new("delete_item").on(OutcomeKind::NotFound, Fallback::Void),
    );
    let pipeline = Pipeline::new(Signer::new(MyRequestSigner), table);

    let body = b"{}";
    let parts = http::Request::delete("https://api.example.com/v1/items/42")
        .header("x-content-sha256", hex_sha256(body))
        .body(())?
        .into_parts()
        .0;
    let signed = pipeline.sign(parts, &cred)?;
    println!("signed request: {:?}", signed.parts());

    // The item is already gone, which the operation accepts.
    pipeline.handle_failure::<()>(
        "delete_item",
        Failure::Response(cloudreq_core::ErrorEnvelope::new(http::StatusCode::NOT_FOUND)),
    )?;
    println!("delete_item resolved");

    Ok(())
}
