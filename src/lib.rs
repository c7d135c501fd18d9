//! Model Regions Library
//!
//! Region-aware loading of DashScope and SiliconFlow chat models on top of
//! the serdes-ai model clients.

pub mod config;
pub mod messaging;
pub mod models;
pub mod providers;
pub mod runner;

pub use messaging::{get_message_text, Message, MessageContent};
pub use models::{
    global_registry, load_chat_model, normalize_region, LoadError, ModelOptions, Region,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
