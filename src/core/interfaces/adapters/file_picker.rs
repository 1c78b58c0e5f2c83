use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{SelectedFile, UploadKind};

#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Returns `None` when the user dismisses the picker.
    async fn pick_file(&self, kind: UploadKind) -> Result<Option<SelectedFile>>;
}
