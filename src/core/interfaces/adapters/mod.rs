mod file_picker;
mod meme_image_loader;
mod meme_search_service;
mod meme_upload_service;

pub use file_picker::FilePicker;
pub use meme_image_loader::MemeImageLoader;
pub use meme_search_service::MemeSearchService;
pub use meme_upload_service::MemeUploadService;
