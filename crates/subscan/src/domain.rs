use reqwest::Url;

// region:        --- Domain

// A candidate hostname. The inner string is the submitted input,
// untransformed: no trimming, case-folding or punycode conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(String);

impl Domain {
    // shared by the pre-submit gate and the orchestrator, both sides must
    // take the same accept/reject decision for the same input
    pub fn parse(input: &str) -> core::result::Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        if trimmed == "."
            || !input.contains('.')
            || input.starts_with('.')
            || input.ends_with('.')
        {
            return Err(ValidationError::InvalidFormat);
        }

        // the service expects a bare hostname, a placeholder scheme makes
        // it parseable as a URL
        match Url::parse(&format!("http://{}", input)) {
            Ok(url) if url.host_str().is_some() => Ok(Self(input.to_string())),
            _ => Err(ValidationError::InvalidFormat),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Domain {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

// endregion:     --- Domain

// region:        --- ValidationError

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyInput,
    InvalidFormat,
}

impl ValidationError {
    // message surfaced inline next to the input field
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "Domain cannot be empty.",
            ValidationError::InvalidFormat => "Invalid domain format (e.g., example.com)",
        }
    }
}

// region:    --- Error Boilerplate

impl core::fmt::Display for ValidationError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for ValidationError {}

// endregion: --- Error Boilerplate

// endregion:     --- ValidationError
