use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::MemeRecord;

#[async_trait]
pub trait MemeSearchService: Send + Sync {
    async fn search_memes(&self, query: &str) -> Result<Vec<MemeRecord>>;
}
