/// Signed URL handler - issues a time-limited CloudFront URL for one object
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use secret_store::SecretStore;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::cdn::{resource_url, SigningKey, UrlSigner};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct SignedUrlQuery {
    pub key: Option<String>,
}

/// Issue a signed URL for the requested object key
///
/// Validation runs strictly before any backend call: a missing key never
/// touches the secret store, and missing configuration is reported before
/// it as well. The signing key is fetched fresh on every request.
pub async fn signed_url(
    config: web::Data<Config>,
    secrets: web::Data<SecretStore>,
    query: web::Query<SignedUrlQuery>,
) -> Result<HttpResponse> {
    let key = query
        .key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AppError::Validation("key query parameter is required".to_string()))?;

    let signer_config = config.signing.resolve()?;

    let pem = secrets
        .get_private_key_pem(&signer_config.secret_name)
        .await?;
    let signing_key = SigningKey::from_pem(&pem)?;
    let signer = UrlSigner::new(signer_config.key_pair_id, signing_key);

    let resource = resource_url(&signer_config.host_name, key);
    let signed = signer.sign_url(&resource, signer_config.expiration_secs)?;

    debug!(
        resource = %resource,
        expire_at_ms = signed.expire_at_ms,
        "Issued signed URL"
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::signed_url_fragment(&signed.url)))
}
