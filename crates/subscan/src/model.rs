use serde::{Serialize, Serializer};

// region:        --- Models

// Outcome envelope of a single scan attempt: exactly one of a subdomain
// list (possibly empty) or an error message, never both. Serializes to
// {"success":true,"data":[..]} / {"success":false,"error":".."}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    Success { subdomains: Vec<String> },
    Failure { error: String },
}

impl ScanResult {
    pub fn success(subdomains: Vec<String>) -> Self {
        Self::Success { subdomains }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    // in the order the service returned them
    pub fn subdomains(&self) -> Option<&[String]> {
        match self {
            Self::Success { subdomains } => Some(subdomains),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for ScanResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        Envelope {
            success: self.is_success(),
            data: self.subdomains(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

// endregion:     --- Models
