use cloudreq_core::{Context, OsEnv};
use cloudreq_file_read_tokio::TokioFileRead;

/// Build a [`Context`] backed by the process environment and tokio file reads.
///
/// This is what credential providers need outside of tests: `OsEnv` for
/// `AWS_ACCESS_KEY_ID` and friends, `TokioFileRead` for key files such as
/// `CHEF_CLIENT_KEY`.
pub fn default_context() -> Context {
    Context::new().with_file_read(TokioFileRead).with_env(OsEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_context_reads_files() {
        let ctx = default_context();
        let content = ctx
            .file_read_as_string(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
            .await
            .expect("manifest must be readable");
        assert!(content.contains("name = \"cloudreq\""));
    }
}
