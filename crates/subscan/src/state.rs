use crate::domain::Domain;
use crate::model::ScanResult;

// region:        --- States

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning {
        domain: String,
    },
    Succeeded {
        domain: String,
        subdomains: Vec<String>,
    },
    Failed {
        domain: String,
        error: String,
    },
}

// one-line completion summary, raised on every terminal transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: String,
}

// endregion:     --- States

// region:        --- ScanSession

// Owns the client-visible state of one scan session. Transitions:
// Idle -> Scanning -> Succeeded | Failed -> Scanning on the next
// submission; Idle is never re-entered after start. Each transition
// replaces the state wholesale.
#[derive(Debug)]
pub struct ScanSession {
    state: ScanState,
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    // the submit gate: false only while a scan is in flight
    pub fn can_submit(&self) -> bool {
        !matches!(self.state, ScanState::Scanning { .. })
    }

    // records a validated submission and enters Scanning, dropping any
    // prior result or error; refused while a scan is in flight
    pub fn begin(&mut self, domain: &Domain) -> bool {
        if !self.can_submit() {
            return false;
        }

        self.state = ScanState::Scanning {
            domain: domain.to_string(),
        };
        true
    }

    // applies the envelope of the in-flight scan; ignored outside
    // Scanning, there is no attempt to settle
    pub fn complete(&mut self, result: ScanResult) {
        let domain = match &self.state {
            ScanState::Scanning { domain } => domain.clone(),
            _ => return,
        };

        self.state = match result {
            ScanResult::Success { subdomains } => ScanState::Succeeded { domain, subdomains },
            ScanResult::Failure { error } => ScanState::Failed { domain, error },
        };
    }

    pub fn toast(&self) -> Option<Toast> {
        match &self.state {
            ScanState::Succeeded { domain, subdomains } if subdomains.is_empty() => Some(Toast {
                title: "Scan Complete",
                description: format!("No subdomains found for {}.", domain),
            }),
            ScanState::Succeeded { domain, subdomains } => Some(Toast {
                title: "Scan Successful",
                description: format!("Found {} subdomains for {}.", subdomains.len(), domain),
            }),
            ScanState::Failed { error, .. } => Some(Toast {
                title: "Scan Failed",
                description: error.clone(),
            }),
            ScanState::Idle | ScanState::Scanning { .. } => None,
        }
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

// endregion:     --- ScanSession

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(input: &str) -> Domain {
        Domain::parse(input).unwrap()
    }

    #[test]
    fn starts_idle() {
        let session = ScanSession::new();
        assert_eq!(session.state(), &ScanState::Idle);
        assert!(session.can_submit());
        assert!(session.toast().is_none());
    }

    #[test]
    fn submission_enters_scanning() {
        let mut session = ScanSession::new();
        assert!(session.begin(&domain("example.com")));

        assert_eq!(
            session.state(),
            &ScanState::Scanning {
                domain: "example.com".to_string()
            }
        );
        assert!(session.toast().is_none());
    }

    #[test]
    fn refuses_a_second_submission_while_in_flight() {
        let mut session = ScanSession::new();
        assert!(session.begin(&domain("example.com")));

        assert!(!session.can_submit());
        assert!(!session.begin(&domain("other.com")));
        assert_eq!(
            session.state(),
            &ScanState::Scanning {
                domain: "example.com".to_string()
            }
        );
    }

    #[test]
    fn success_stores_the_subdomains() {
        let mut session = ScanSession::new();
        session.begin(&domain("example.com"));
        session.complete(ScanResult::success(vec!["a.example.com".to_string()]));

        assert_eq!(
            session.state(),
            &ScanState::Succeeded {
                domain: "example.com".to_string(),
                subdomains: vec!["a.example.com".to_string()],
            }
        );
        assert!(session.can_submit());

        let toast = session.toast().unwrap();
        assert_eq!(toast.title, "Scan Successful");
        assert_eq!(toast.description, "Found 1 subdomains for example.com.");
    }

    #[test]
    fn empty_success_has_its_own_toast() {
        let mut session = ScanSession::new();
        session.begin(&domain("example.com"));
        session.complete(ScanResult::success(Vec::new()));

        let toast = session.toast().unwrap();
        assert_eq!(toast.title, "Scan Complete");
        assert_eq!(toast.description, "No subdomains found for example.com.");
    }

    #[test]
    fn failure_stores_the_error() {
        let mut session = ScanSession::new();
        session.begin(&domain("example.com"));
        session.complete(ScanResult::failure("API rate limit exceeded. Please try again later."));

        assert_eq!(
            session.state(),
            &ScanState::Failed {
                domain: "example.com".to_string(),
                error: "API rate limit exceeded. Please try again later.".to_string(),
            }
        );

        let toast = session.toast().unwrap();
        assert_eq!(toast.title, "Scan Failed");
    }

    #[test]
    fn terminal_states_are_not_sticky() {
        let mut session = ScanSession::new();

        session.begin(&domain("example.com"));
        session.complete(ScanResult::failure("boom"));
        assert!(session.begin(&domain("other.com")));

        // the previous error is gone, the new submission owns the state
        assert_eq!(
            session.state(),
            &ScanState::Scanning {
                domain: "other.com".to_string()
            }
        );

        session.complete(ScanResult::success(vec!["a.other.com".to_string()]));
        assert!(session.begin(&domain("example.com")));
        assert_eq!(
            session.state(),
            &ScanState::Scanning {
                domain: "example.com".to_string()
            }
        );
    }

    #[test]
    fn completion_outside_scanning_is_ignored() {
        let mut session = ScanSession::new();
        session.complete(ScanResult::success(vec!["a.example.com".to_string()]));
        assert_eq!(session.state(), &ScanState::Idle);
    }
}
