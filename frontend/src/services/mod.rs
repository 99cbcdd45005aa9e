pub mod config;
pub mod date_utils;
pub mod gemini;
pub mod logging;

pub use gemini::GeminiClient;
pub use logging::Logger;
