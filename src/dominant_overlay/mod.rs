pub mod config;
pub mod dominant_color;
pub mod edges;
pub mod histogram;
pub mod io;
pub mod overlay;
pub mod substitute;
