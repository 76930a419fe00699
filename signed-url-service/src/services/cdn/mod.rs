/// CDN signing module
///
/// CloudFront grants time-limited access to private origin content through
/// signed URLs: a canned policy over {resource URL, expiration} is signed
/// with an RSA key whose public half is registered in the distribution's
/// trusted key group.
mod policy;
pub mod url_signer;

// Re-export commonly used types
pub use url_signer::{resource_url, SignedUrl, SigningError, SigningKey, UrlSigner};
