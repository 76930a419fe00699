/// HTTP handlers for the viewer surface
///
/// This module contains handlers for:
/// - Listing: render the bucket contents as an HTML page
/// - Signed URL: issue a time-limited CloudFront URL for one object
pub mod listing;
pub mod signed_url;

// Explicit re-exports
pub use listing::index;
pub use signed_url::signed_url;
