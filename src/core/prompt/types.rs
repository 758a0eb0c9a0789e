/// A yes/no confirmation prompt.
pub struct YesNoPrompt {
    pub question: String,
    /// true = default yes [Y/n], false = default no [y/N]
    pub default: bool,
}

/// Free text input.
pub struct TextPrompt {
    pub question: String,
    pub default: Option<String>,
    /// Returns a problem description when the answer is rejected.
    pub validate: Option<fn(&str) -> Option<&'static str>>,
}

impl TextPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: None,
            validate: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validate: fn(&str) -> Option<&'static str>) -> Self {
        self.validate = Some(validate);
        self
    }
}
