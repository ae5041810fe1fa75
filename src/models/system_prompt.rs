use serde::Deserialize;
use strum::{Display, EnumString};

const GENERIC_PROMPT: &str = "You are a helpful assistant.";

const NOTEBOOK_PROMPT: &str = "\
You answer questions sent from a Jupyter notebook.
Always reply in Markdown.
- If the question is a multiple-choice question, reply with only the selected option and no explanation.
- If the question asks for code, reply with exactly one fenced code block that contains directly runnable code and no comment lines.
- For any other question, answer normally using standard Markdown formatting.";

/// Which fixed system prompt a deployment sends with every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SystemPromptVariant {
    Generic,
    #[default]
    Notebook,
}

impl SystemPromptVariant {
    pub fn text(self) -> &'static str {
        match self {
            SystemPromptVariant::Generic => GENERIC_PROMPT,
            SystemPromptVariant::Notebook => NOTEBOOK_PROMPT,
        }
    }
}
