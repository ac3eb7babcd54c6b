pub mod assets;
pub mod config;
pub mod errors;
pub mod generator;
pub mod icon;
pub mod net;
pub mod persist;
pub mod render;

pub use config::IconConfig;
pub use errors::IconError;
pub use generator::{generate, GeneratedIcon};
