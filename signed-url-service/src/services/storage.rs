/// S3 object listing for the viewer page
use aws_sdk_s3::types::Object;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::ListingConfig;
use crate::error::{AppError, Result};

/// One listed object; directory markers are already filtered out
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    pub key: String,
    pub size_bytes: i64,
    pub last_modified: Option<DateTime<Utc>>,
}

/// List objects in the configured bucket under the optional prefix
pub async fn list_objects(client: &Client, config: &ListingConfig) -> Result<Vec<ObjectSummary>> {
    let mut request = client.list_objects_v2().bucket(&config.bucket);
    if let Some(prefix) = &config.base_path {
        request = request.prefix(prefix);
    }

    let response = request.send().await.map_err(|e| {
        AppError::Storage(format!("Failed to list bucket {}: {}", config.bucket, e))
    })?;

    let summaries = summarize(response.contents());
    debug!(
        bucket = %config.bucket,
        count = summaries.len(),
        "Listed storage objects"
    );

    Ok(summaries)
}

/// Drop entries without a key and directory markers; keep backend order
fn summarize(objects: &[Object]) -> Vec<ObjectSummary> {
    objects
        .iter()
        .filter_map(|obj| {
            let key = obj.key().unwrap_or_default();
            if key.is_empty() || key.ends_with('/') {
                return None;
            }

            Some(ObjectSummary {
                key: key.to_string(),
                size_bytes: obj.size().unwrap_or(0),
                last_modified: obj
                    .last_modified()
                    .and_then(|dt| DateTime::from_timestamp(dt.secs(), 0)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::primitives::DateTime as S3DateTime;

    fn object(key: &str) -> Object {
        Object::builder().key(key).build()
    }

    #[test]
    fn test_summarize_drops_directory_markers() {
        let objects = vec![
            object("reports/"),
            object("reports/q1.pdf"),
            object("reports/archive/"),
            object("reports/q2.pdf"),
        ];

        let summaries = summarize(&objects);
        let keys: Vec<&str> = summaries.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["reports/q1.pdf", "reports/q2.pdf"]);
    }

    #[test]
    fn test_summarize_drops_entries_without_key() {
        let objects = vec![Object::builder().build(), object("kept.txt")];

        let summaries = summarize(&objects);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].key, "kept.txt");
    }

    #[test]
    fn test_summarize_keeps_backend_order() {
        let objects = vec![object("b.txt"), object("a.txt"), object("c.txt")];

        let keys: Vec<String> = summarize(&objects).into_iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["b.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_summarize_carries_size_and_timestamp() {
        let objects = vec![Object::builder()
            .key("reports/q1.pdf")
            .size(4096)
            .last_modified(S3DateTime::from_secs(1_767_290_400))
            .build()];

        let summaries = summarize(&objects);
        assert_eq!(summaries[0].size_bytes, 4096);
        let modified = summaries[0].last_modified.expect("timestamp carried over");
        assert_eq!(modified.timestamp(), 1_767_290_400);
    }
}
