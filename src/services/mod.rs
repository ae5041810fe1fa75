pub mod chat_api_openai;
pub mod credentials;
pub mod helper_script;
pub mod relay;
