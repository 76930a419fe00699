/// Service layer for the viewer surface
///
/// This module provides the two backend-facing operations:
/// - Storage: bucket listing with directory markers filtered out
/// - CDN: CloudFront canned-policy URL signing
pub mod cdn;
pub mod storage;
