use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{SelectedFile, UploadKind};

#[async_trait]
pub trait MemeUploadService: Send + Sync {
    async fn upload_file(&self, kind: UploadKind, file: &SelectedFile) -> Result<()>;
}
