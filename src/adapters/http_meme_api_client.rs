use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::{MemeImageLoader, MemeSearchService, MemeUploadService};
use crate::core::models::{MemeRecord, SearchResponse, SelectedFile, UploadKind, UserSettings};

/// Talks to the meme backend over HTTP. Endpoint paths, the search
/// parameter and the upload field names all come from [`UserSettings`].
pub struct HttpMemeApiClient {
    client: reqwest::Client,
    settings: UserSettings,
}

impl HttpMemeApiClient {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn construct_search_url(&self, query: &str) -> String {
        let search_url = self.settings.search_url();
        let separator = if search_url.contains('?') { '&' } else { '?' };

        format!(
            "{}{}{}={}",
            search_url,
            separator,
            urlencoding::encode(&self.settings.search_query_param),
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl MemeSearchService for HttpMemeApiClient {
    async fn search_memes(&self, query: &str) -> Result<Vec<MemeRecord>> {
        let search_url = self.construct_search_url(query);
        log::info!("[HTTP] Searching memes");
        log::debug!("[HTTP] Search URL: {}", search_url);

        let response = self
            .client
            .get(&search_url)
            .send()
            .await?
            .error_for_status()?;

        let response_text = response.text().await?;
        log::debug!("[HTTP] Search response: {}", response_text);

        let parsed: SearchResponse =
            serde_json::from_str(&response_text).context("Malformed search response")?;
        let records = parsed.into_records();

        log::info!("[HTTP] Search returned {} memes", records.len());
        Ok(records)
    }
}

#[async_trait]
impl MemeUploadService for HttpMemeApiClient {
    async fn upload_file(&self, kind: UploadKind, file: &SelectedFile) -> Result<()> {
        let upload_url = self.settings.upload_url(kind);
        let field_name = self.settings.upload_field_name(kind).to_string();

        log::info!(
            "[HTTP] Uploading {} '{}' ({} bytes)",
            kind,
            file.file_name,
            file.bytes.len()
        );
        log::debug!("[HTTP] Upload URL: {}, field: {}", upload_url, field_name);

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type(kind))?;
        let form = reqwest::multipart::Form::new().part(field_name, part);

        let response = self
            .client
            .post(&upload_url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        log::info!("[HTTP] {} upload accepted with {}", kind, response.status());
        Ok(())
    }
}

#[async_trait]
impl MemeImageLoader for HttpMemeApiClient {
    async fn load_image_bytes(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("[HTTP] Fetching meme image: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Multipart, Query};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type ReceivedPart = (String, Option<String>, Vec<u8>);

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", address)
    }

    fn client_for(base_url: String) -> HttpMemeApiClient {
        HttpMemeApiClient::new(UserSettings {
            api_base_url: base_url,
            ..UserSettings::default()
        })
    }

    fn recording_upload_router(path: &str, parts: Arc<Mutex<Vec<ReceivedPart>>>) -> Router {
        Router::new().route(
            path,
            post(move |mut multipart: Multipart| {
                let parts = Arc::clone(&parts);
                async move {
                    while let Some(field) = multipart.next_field().await.unwrap() {
                        let name = field.name().unwrap_or_default().to_string();
                        let file_name = field.file_name().map(str::to_string);
                        let bytes = field.bytes().await.unwrap().to_vec();
                        parts.lock().unwrap().push((name, file_name, bytes));
                    }
                    StatusCode::OK
                }
            }),
        )
    }

    #[test]
    fn test_construct_search_url_encodes_query() {
        let client = client_for("http://memes.test".to_string());

        let url = client.construct_search_url("doge & cat");

        assert_eq!(url, "http://memes.test/search?q=doge%20%26%20cat");
    }

    #[test]
    fn test_construct_search_url_keeps_empty_query() {
        let client = client_for("http://memes.test".to_string());

        assert_eq!(client.construct_search_url(""), "http://memes.test/search?q=");
    }

    #[test]
    fn test_construct_search_url_appends_to_existing_query_string() {
        let client = HttpMemeApiClient::new(UserSettings {
            api_base_url: "http://memes.test".to_string(),
            search_path: "/search?lang=en".to_string(),
            search_query_param: "searchQuery".to_string(),
            ..UserSettings::default()
        });

        assert_eq!(
            client.construct_search_url("doge"),
            "http://memes.test/search?lang=en&searchQuery=doge"
        );
    }

    #[tokio::test]
    async fn test_search_sends_query_and_returns_records_in_order() {
        let received = Arc::new(Mutex::new(Vec::<String>::new()));
        let recorder = Arc::clone(&received);
        let router = Router::new().route(
            "/search",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let recorder = Arc::clone(&recorder);
                async move {
                    recorder
                        .lock()
                        .unwrap()
                        .push(params.get("q").cloned().unwrap_or_default());
                    Json(serde_json::json!({
                        "memes": [
                            {"url": "https://cdn.test/1.png", "title": "first"},
                            {"url": "https://cdn.test/2.png"}
                        ]
                    }))
                }
            }),
        );
        let client = client_for(spawn_server(router).await);

        let records = client.search_memes("doge").await.unwrap();

        assert_eq!(*received.lock().unwrap(), vec!["doge".to_string()]);
        assert_eq!(
            records,
            vec![
                MemeRecord::new("https://cdn.test/1.png", Some("first".to_string())),
                MemeRecord::new("https://cdn.test/2.png", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_accepts_recommended_items_shape() {
        let router = Router::new().route(
            "/search",
            get(|| async {
                Json(serde_json::json!({"recommended_items": ["https://s3.test/a.jpg"]}))
            }),
        );
        let client = client_for(spawn_server(router).await);

        let records = client.search_memes("").await.unwrap();

        assert_eq!(records, vec![MemeRecord::new("https://s3.test/a.jpg", None)]);
    }

    #[tokio::test]
    async fn test_search_server_error_is_failure() {
        let router = Router::new().route(
            "/search",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = client_for(spawn_server(router).await);

        assert!(client.search_memes("doge").await.is_err());
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_failure() {
        let router = Router::new().route("/search", get(|| async { "not json" }));
        let client = client_for(spawn_server(router).await);

        assert!(client.search_memes("doge").await.is_err());
    }

    #[tokio::test]
    async fn test_meme_upload_sends_single_named_part() {
        let parts = Arc::new(Mutex::new(Vec::new()));
        let router = recording_upload_router("/api/upload/meme", Arc::clone(&parts));
        let client = client_for(spawn_server(router).await);
        let file = SelectedFile::new("doge.png", vec![0x89, b'P', b'N', b'G', 1, 2, 3]);

        client.upload_file(UploadKind::Meme, &file).await.unwrap();

        let parts = parts.lock().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].0, "meme");
        assert_eq!(parts[0].1.as_deref(), Some("doge.png"));
        assert_eq!(parts[0].2, file.bytes);
    }

    #[tokio::test]
    async fn test_dataset_upload_uses_dataset_endpoint_and_field() {
        let parts = Arc::new(Mutex::new(Vec::new()));
        let router = recording_upload_router("/api/upload/dataset", Arc::clone(&parts));
        let client = client_for(spawn_server(router).await);
        let file = SelectedFile::new("data.csv", b"#,image_name,text_corrected\n".to_vec());

        client.upload_file(UploadKind::Dataset, &file).await.unwrap();

        let parts = parts.lock().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].0, "dataset");
        assert_eq!(parts[0].2, file.bytes);
    }

    #[tokio::test]
    async fn test_upload_rejected_by_server_is_failure() {
        let router = Router::new().route(
            "/api/upload/meme",
            post(|| async { StatusCode::BAD_REQUEST }),
        );
        let client = client_for(spawn_server(router).await);
        let file = SelectedFile::new("doge.png", vec![1, 2, 3]);

        assert!(client.upload_file(UploadKind::Meme, &file).await.is_err());
    }

    #[tokio::test]
    async fn test_load_image_bytes_returns_body() {
        let router = Router::new().route("/img.png", get(|| async { vec![7u8, 8, 9] }));
        let base_url = spawn_server(router).await;
        let client = client_for(base_url.clone());

        let bytes = client
            .load_image_bytes(&format!("{}/img.png", base_url))
            .await
            .unwrap();

        assert_eq!(bytes, vec![7, 8, 9]);
    }

    #[tokio::test]
    async fn test_load_image_bytes_missing_image_is_failure() {
        let base_url = spawn_server(Router::new()).await;
        let client = client_for(base_url.clone());

        let result = client
            .load_image_bytes(&format!("{}/gone.png", base_url))
            .await;

        assert!(result.is_err());
    }
}
