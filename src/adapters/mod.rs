mod http_meme_api_client;
mod rfd_file_picker;

pub use http_meme_api_client::HttpMemeApiClient;
pub use rfd_file_picker::RfdFilePicker;
