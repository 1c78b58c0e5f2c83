use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MemeImageLoader: Send + Sync {
    async fn load_image_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
