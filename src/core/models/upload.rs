use std::fmt;
use std::path::Path;

use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Meme,
    Dataset,
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadKind::Meme => write!(f, "meme"),
            UploadKind::Dataset => write!(f, "dataset"),
        }
    }
}

impl UploadKind {
    pub fn picker_title(&self) -> &'static str {
        match self {
            UploadKind::Meme => "Select a meme image",
            UploadKind::Dataset => "Select a dataset file",
        }
    }

    pub fn picker_filter_name(&self) -> &'static str {
        match self {
            UploadKind::Meme => "Images",
            UploadKind::Dataset => "CSV or JSON",
        }
    }

    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Meme => global_constants::MEME_FILE_EXTENSIONS,
            UploadKind::Dataset => global_constants::DATASET_FILE_EXTENSIONS,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            UploadKind::Meme => global_constants::MEME_UPLOAD_SUCCESS_MESSAGE,
            UploadKind::Dataset => global_constants::DATASET_UPLOAD_SUCCESS_MESSAGE,
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            UploadKind::Meme => global_constants::MEME_UPLOAD_FAILED_MESSAGE,
            UploadKind::Dataset => global_constants::DATASET_UPLOAD_FAILED_MESSAGE,
        }
    }
}

/// A file the user picked, read fully into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type for the multipart part. Images are sniffed from their
    /// bytes, datasets go by extension.
    pub fn mime_type(&self, kind: UploadKind) -> &'static str {
        match kind {
            UploadKind::Meme => image::guess_format(&self.bytes)
                .map(|format| format.to_mime_type())
                .unwrap_or("application/octet-stream"),
            UploadKind::Dataset => match self.extension().as_deref() {
                Some("csv") => "text/csv",
                Some("json") => "application/json",
                _ => "application/octet-stream",
            },
        }
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}
