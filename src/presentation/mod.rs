pub mod app_theme;
pub mod result_grid;

pub use result_grid::ResultGridView;
