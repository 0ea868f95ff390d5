mod app;
mod theme;
mod views;

pub use app::StudyBoxApp;
pub use theme::{setup_fonts, setup_theme};
