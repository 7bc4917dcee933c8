pub mod app;
pub mod data;
pub mod model;
pub mod ui;

pub use app::BarometerApp;
