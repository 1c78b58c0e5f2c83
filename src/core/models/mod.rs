mod meme;
mod meme_board;
mod upload;
mod user_settings;

pub use meme::{MemeRecord, SearchResponse};
pub use meme_board::{MemeBoard, NoticeId, SearchTicket};
pub use upload::{SelectedFile, UploadKind};
pub use user_settings::{ThemeMode, UserSettings};
