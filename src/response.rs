use std::error::Error;
use std::fmt;

use crate::dispatch::Outcome;

/// Line printed before the call goes out.
pub fn announce_line(body: &str) -> String {
    format!("Initiating request: {body}")
}

/// Error message followed by every cause in its source chain, joined with
/// `: `. Consecutive duplicates are skipped since some layers repeat the
/// message of the error they wrap.
pub fn describe(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut last = msg.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && text != last {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        last = text;
        source = cause.source();
    }
    msg
}

/// Renders the single outcome line written to stdout.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded(body) => write!(f, "Response: {body}"),
            Self::Failed(e) if e.is_protocol() => write!(f, "Error: {e}"),
            Self::Failed(e) => write!(f, "An error occurred: {}", describe(e)),
        }
    }
}
