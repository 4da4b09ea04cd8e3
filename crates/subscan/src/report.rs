use crate::model::ScanResult;
use crate::state::{ScanState, Toast};

// region:        --- Terminal rendering

pub fn render_state(state: &ScanState) {
    match state {
        ScanState::Idle => {
            println!("Enter a domain to discover its subdomains.");
        }

        ScanState::Scanning { domain } => {
            println!("Scanning {}...", domain);
            println!("(This might take a moment)");
        }

        ScanState::Succeeded { domain, subdomains } if subdomains.is_empty() => {
            println!("No subdomains found for {}.", domain);
        }

        ScanState::Succeeded { domain, subdomains } => {
            println!("Results for {}", domain);
            for subdomain in subdomains {
                println!("> {}", subdomain);
            }
            println!("Found {} subdomains.", subdomains.len());
        }

        ScanState::Failed { error, .. } => {
            println!("Error: {}", error);
        }
    }
}

pub fn render_toast(toast: &Toast) {
    println!("[{}] {}", toast.title, toast.description);
}

// raw envelope output, for piping into other tools
pub fn render_json(result: &ScanResult) -> crate::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

// endregion:     --- Terminal rendering
