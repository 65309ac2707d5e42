mod app;
mod commands;
mod effects;
mod logging;
mod map_points;
mod render;

pub use app::run_app;
