pub mod app;
pub mod event;
pub mod motion;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
