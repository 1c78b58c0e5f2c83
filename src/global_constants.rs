use std::time::Duration;

pub const APPLICATION_NAME: &str = "Meme Board - Desktop";
pub const APPLICATION_TITLE: &str = "Meme Board";

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch memes. Please try again.";
pub const MEME_UPLOAD_FAILED_MESSAGE: &str = "Failed to upload meme. Please try again.";
pub const DATASET_UPLOAD_FAILED_MESSAGE: &str = "Failed to upload dataset. Please try again.";
pub const MEME_UPLOAD_SUCCESS_MESSAGE: &str = "Meme uploaded successfully!";
pub const DATASET_UPLOAD_SUCCESS_MESSAGE: &str = "Dataset uploaded successfully!";

pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_secs(3);
pub const SPINNER_TICK_INTERVAL: Duration = Duration::from_millis(80);
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub const SEARCH_PLACEHOLDER: &str = "Search for memes...";
pub const MEME_CARD_FALLBACK_TITLE: &str = "Meme";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SEARCH_PATH: &str = "/search";
pub const DEFAULT_SEARCH_QUERY_PARAM: &str = "q";
pub const DEFAULT_MEME_UPLOAD_PATH: &str = "/api/upload/meme";
pub const DEFAULT_MEME_FIELD_NAME: &str = "meme";
pub const DEFAULT_DATASET_UPLOAD_PATH: &str = "/api/upload/dataset";
pub const DEFAULT_DATASET_FIELD_NAME: &str = "dataset";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const MEME_FILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];
pub const DATASET_FILE_EXTENSIONS: &[&str] = &["csv", "json"];

pub const GRID_TWO_COLUMN_MIN_WIDTH: f32 = 768.0;
pub const GRID_THREE_COLUMN_MIN_WIDTH: f32 = 1024.0;
pub const GRID_CARD_IMAGE_HEIGHT: f32 = 256.0;

pub const SETTINGS_DIR_NAME: &str = "meme-board";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
