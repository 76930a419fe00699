/// Configuration management for signed-url-service
///
/// Loads configuration from environment variables once at startup. Values
/// the service cannot run without stay `Option`s here and are resolved into
/// typed views per request, so a misconfigured deployment answers with a
/// descriptive 500 instead of refusing to boot.
use crate::error::AppError;

/// Default signed URL lifetime when CF_EXPIRATION is not set
pub const DEFAULT_EXPIRATION_SECS: u64 = 3600;

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub signing: SigningConfig,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

/// Bucket listing settings (BUCKET, BASE_PATH)
#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    pub bucket: Option<String>,
    pub base_path: Option<String>,
}

/// Signed URL issuance settings (HOST_NAME, PRIVATE_SECRET_NAME,
/// CF_KEY_PAIR_ID, CF_EXPIRATION)
#[derive(Clone, Debug, Default)]
pub struct SigningConfig {
    pub host_name: Option<String>,
    pub secret_name: Option<String>,
    pub key_pair_id: Option<String>,
    /// Raw CF_EXPIRATION value; validated on resolve
    pub expiration: Option<String>,
}

/// Listing settings with required values present
#[derive(Clone, Debug)]
pub struct ListingConfig {
    pub bucket: String,
    pub base_path: Option<String>,
}

/// Signer settings with required values present and the TTL parsed
#[derive(Clone, Debug)]
pub struct SignerConfig {
    pub host_name: String,
    pub secret_name: String,
    pub key_pair_id: String,
    pub expiration_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            storage: StorageConfig {
                bucket: env_opt("BUCKET"),
                base_path: env_opt("BASE_PATH"),
            },
            signing: SigningConfig {
                host_name: env_opt("HOST_NAME"),
                secret_name: env_opt("PRIVATE_SECRET_NAME"),
                key_pair_id: env_opt("CF_KEY_PAIR_ID"),
                expiration: env_opt("CF_EXPIRATION"),
            },
        }
    }
}

impl StorageConfig {
    /// Resolve into listing settings, failing on missing required values
    pub fn resolve(&self) -> Result<ListingConfig, AppError> {
        let bucket = self
            .bucket
            .clone()
            .ok_or_else(|| AppError::Config("BUCKET is not set".to_string()))?;

        Ok(ListingConfig {
            bucket,
            base_path: self.base_path.clone(),
        })
    }
}

impl SigningConfig {
    /// Resolve into signer settings, failing on missing or invalid values
    pub fn resolve(&self) -> Result<SignerConfig, AppError> {
        let host_name = self
            .host_name
            .clone()
            .ok_or_else(|| AppError::Config("HOST_NAME is not set".to_string()))?;
        let secret_name = self
            .secret_name
            .clone()
            .ok_or_else(|| AppError::Config("PRIVATE_SECRET_NAME is not set".to_string()))?;
        let key_pair_id = self
            .key_pair_id
            .clone()
            .ok_or_else(|| AppError::Config("CF_KEY_PAIR_ID is not set".to_string()))?;

        let expiration_secs = match &self.expiration {
            None => DEFAULT_EXPIRATION_SECS,
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs >= 1)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "CF_EXPIRATION must be a positive integer of seconds, got {raw:?}"
                    ))
                })?,
        };

        Ok(SignerConfig {
            host_name,
            secret_name,
            key_pair_id,
            expiration_secs,
        })
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
