/// CloudFront canned policy document
///
/// CloudFront validates the signature against the exact policy bytes it
/// reconstructs from the query parameters, so the layout below (key order,
/// no whitespace) is part of the wire contract.
pub(crate) fn canned_policy(resource_url: &str, expires_epoch_secs: i64) -> String {
    format!(
        "{{\"Statement\":[{{\"Resource\":\"{}\",\"Condition\":{{\"DateLessThan\":{{\"AWS:EpochTime\":{}}}}}}}]}}",
        resource_url, expires_epoch_secs
    )
}
