pub mod advisor;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod storage;

pub use config::{AppConfig, EasingType, EngineConfig, MotionConfig};
pub use error::{Error, Result};
