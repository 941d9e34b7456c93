use std::collections::HashMap;

use anyhow::{anyhow, Result};

use crate::constants::*;
use crate::Config;

/// Parse the blob related fields of a connection string.
pub(crate) fn parse(conn: &str) -> Result<Config> {
    let fields = parse_fields(conn)?;

    if fields.get("UseDevelopmentStorage").map(String::as_str) == Some("true") {
        let account_name = fields
            .get("AccountName")
            .cloned()
            .unwrap_or_else(|| AZURITE_ACCOUNT_NAME.to_string());
        let proxy = fields
            .get("DevelopmentStorageProxyUri")
            .map(String::as_str)
            .unwrap_or(AZURITE_BLOB_ENDPOINT);

        return Ok(Config {
            endpoint: Some(format!("{proxy}/{account_name}")),
            account_key: Some(
                fields
                    .get("AccountKey")
                    .cloned()
                    .unwrap_or_else(|| AZURITE_ACCOUNT_KEY.to_string()),
            ),
            account_name: Some(account_name),
        });
    }

    Ok(Config {
        endpoint: endpoint(&fields)?,
        account_name: fields.get("AccountName").cloned(),
        account_key: fields.get("AccountKey").cloned(),
    })
}

fn parse_fields(conn: &str) -> Result<HashMap<String, String>> {
    conn.trim()
        .replace('\n', "")
        .split(';')
        .filter(|field| !field.is_empty())
        .map(|field| {
            let (key, value) = field
                .trim()
                .split_once('=')
                .ok_or_else(|| anyhow!("expected '=' in field: {field}"))?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

fn endpoint(fields: &HashMap<String, String>) -> Result<Option<String>> {
    if let Some(endpoint) = fields.get("BlobEndpoint") {
        return Ok(Some(endpoint.clone()));
    }

    let (Some(account_name), Some(suffix)) =
        (fields.get("AccountName"), fields.get("EndpointSuffix"))
    else {
        return Ok(None);
    };
    let protocol = match fields.get("DefaultEndpointsProtocol").map(String::as_str) {
        None => "https",
        Some(p @ ("http" | "https")) => p,
        Some(p) => return Err(anyhow!("unsupported DefaultEndpointsProtocol: {p}")),
    };

    Ok(Some(format!("{protocol}://{account_name}.blob.{suffix}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blob_endpoint() -> Result<()> {
        let cfg = parse(
            "BlobEndpoint=https://myaccount.blob.core.windows.net/;\
             AccountName=myaccount;AccountKey=a2V5",
        )?;
        assert_eq!(
            cfg.endpoint.as_deref(),
            Some("https://myaccount.blob.core.windows.net/")
        );
        assert_eq!(cfg.account_name.as_deref(), Some("myaccount"));
        assert_eq!(cfg.account_key.as_deref(), Some("a2V5"));
        Ok(())
    }

    #[test]
    fn test_development_storage() -> Result<()> {
        let cfg = parse("UseDevelopmentStorage=true")?;
        assert_eq!(cfg.account_name.as_deref(), Some(AZURITE_ACCOUNT_NAME));
        assert_eq!(cfg.account_key.as_deref(), Some(AZURITE_ACCOUNT_KEY));
        assert_eq!(
            cfg.endpoint.as_deref(),
            Some("http://127.0.0.1:10000/devstoreaccount1")
        );
        Ok(())
    }

    #[test]
    fn test_without_endpoint() -> Result<()> {
        let cfg = parse("AccountName=myaccount;AccountKey=a2V5")?;
        assert_eq!(cfg.endpoint, None);
        Ok(())
    }

    #[test]
    fn test_unsupported_protocol() {
        assert!(parse("AccountName=a;EndpointSuffix=core.windows.net;DefaultEndpointsProtocol=ftp").is_err());
    }
}
