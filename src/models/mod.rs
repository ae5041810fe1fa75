pub mod config;
pub mod system_prompt;
pub mod types;
