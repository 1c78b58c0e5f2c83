use anyhow::{Context, Result};
use async_trait::async_trait;
use rfd::AsyncFileDialog;

use crate::core::interfaces::adapters::FilePicker;
use crate::core::models::{SelectedFile, UploadKind};

/// Native open-file dialog. The extension filter is a hint to the user,
/// nothing here rejects a file on its type or size.
pub struct RfdFilePicker;

impl RfdFilePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FilePicker for RfdFilePicker {
    async fn pick_file(&self, kind: UploadKind) -> Result<Option<SelectedFile>> {
        log::info!("[FILE_PICKER] Opening {} picker", kind);

        let handle = AsyncFileDialog::new()
            .set_title(kind.picker_title())
            .add_filter(kind.picker_filter_name(), kind.accepted_extensions())
            .pick_file()
            .await;

        let Some(handle) = handle else {
            log::info!("[FILE_PICKER] Picker dismissed without a file");
            return Ok(None);
        };

        let path = handle.path().to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;

        log::debug!("[FILE_PICKER] Read {} bytes from {:?}", bytes.len(), path);
        Ok(Some(SelectedFile::new(file_name, bytes)))
    }
}
