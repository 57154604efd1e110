use std::fmt;

/// Which resolution path produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Roy,
    Web,
    Offers,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::Roy => "roy",
            AnswerSource::Web => "web",
            AnswerSource::Offers => "offers",
        }
    }

    /// Badge text shown under the answer
    pub fn badge(&self) -> &'static str {
        match self {
            AnswerSource::Roy => "Answered by Roy",
            AnswerSource::Web => "Answered from Web",
            AnswerSource::Offers => "Answered from Card Offers",
        }
    }
}

impl fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub text: String,
    pub source: AnswerSource,
}

impl AnswerResult {
    pub fn roy(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::Roy,
        }
    }

    pub fn web(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::Web,
        }
    }

    pub fn offers(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AnswerSource::Offers,
        }
    }
}
