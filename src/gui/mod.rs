//! GUI module - application shell

mod app;
mod pie_view;

pub use app::TimevizApp;
pub use pie_view::PieGridView;
