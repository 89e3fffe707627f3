use crate::model::{ChatRequest, Message};

pub const MODEL: &str = "gpt-4o";
pub const TEMPERATURE: f64 = 0.8;
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

const SUMMARIZE_SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes text, make it very easy to understand and make it concise.";
const TRANSLATE_SYSTEM_PROMPT: &str = "You are a helpful assistant that translates text, make the translation completely accurate and maintain the meaning of the original text in the original language.";
const SENTIMENT_SYSTEM_PROMPT: &str = "You are a helpful assistant that does sentiment analysis on text, analyze the sentiment/feelings behind this text with accuracy and give a detailed summary of your analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Summarize,
    Translate,
    AnalyzeSentiment,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Translate => "translate",
            Self::AnalyzeSentiment => "sentiment-analysis",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Summarize => SUMMARIZE_SYSTEM_PROMPT,
            Self::Translate => TRANSLATE_SYSTEM_PROMPT,
            Self::AnalyzeSentiment => SENTIMENT_SYSTEM_PROMPT,
        }
    }

    /// Label printed in front of the result.
    pub fn result_label(&self) -> &'static str {
        match self {
            Self::Summarize => "Summary",
            Self::Translate => "translation",
            Self::AnalyzeSentiment => "Sentiment Analysis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub kind: TaskKind,
    pub text: String,
    pub target_language: Option<String>,
}

impl TaskRequest {
    pub fn summarize(text: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::Summarize,
            text: text.into(),
            target_language: None,
        }
    }

    pub fn translate(text: impl Into<String>, target_language: Option<String>) -> Self {
        Self {
            kind: TaskKind::Translate,
            text: text.into(),
            target_language,
        }
    }

    pub fn analyze_sentiment(text: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::AnalyzeSentiment,
            text: text.into(),
            target_language: None,
        }
    }

    pub fn target_language(&self) -> &str {
        self.target_language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .unwrap_or(DEFAULT_TARGET_LANGUAGE)
    }

    pub fn user_prompt(&self) -> String {
        match self.kind {
            TaskKind::Summarize => format!("Please summarize the following text: {}", self.text),
            TaskKind::Translate => format!(
                "Please translate the following text: {} to {}",
                self.text,
                self.target_language()
            ),
            TaskKind::AnalyzeSentiment => {
                format!("Please analyze the following text: {}", self.text)
            }
        }
    }

    pub fn prompt_spec(&self) -> PromptSpec {
        PromptSpec {
            system_prompt: self.kind.system_prompt().to_string(),
            user_prompt: self.user_prompt(),
            model: MODEL.to_string(),
            temperature: TEMPERATURE,
        }
    }
}

/// Everything that varies between the per-task requests.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
    pub temperature: f64,
}

impl PromptSpec {
    pub fn into_chat_request(self) -> ChatRequest {
        ChatRequest {
            model: self.model,
            messages: vec![
                Message::system(self.system_prompt),
                Message::user(self.user_prompt),
            ],
            temperature: self.temperature,
        }
    }
}
