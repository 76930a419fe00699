/// Listing handler - renders the bucket contents
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::error::Result;
use crate::services::storage;
use crate::views;

/// Render the viewer page for the configured bucket
///
/// Configuration is resolved before the S3 client is touched, so a missing
/// BUCKET reports a configuration error without a backend call.
pub async fn index(
    config: web::Data<Config>,
    s3: web::Data<aws_sdk_s3::Client>,
) -> Result<HttpResponse> {
    let listing = config.storage.resolve()?;
    let objects = storage::list_objects(&s3, &listing).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::listing_page(&objects)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn offline_s3_client() -> aws_sdk_s3::Client {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .build();
        aws_sdk_s3::Client::from_conf(config)
    }

    fn unconfigured() -> Config {
        Config {
            app: crate::config::AppConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            storage: Default::default(),
            signing: Default::default(),
        }
    }

    #[actix_rt::test]
    async fn test_index_without_bucket_is_config_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(unconfigured()))
                .app_data(web::Data::new(offline_s3_client()))
                .route("/", web::get().to(index)),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("BUCKET"));
    }
}
