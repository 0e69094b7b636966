use crate::error::invalid_input;
use anyhow::Result;
use rolodex_core::{dialing_code_index, ContactId, CoreError, DIALING_CODES};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub fn parse_contact_id(raw: &str) -> Result<ContactId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("contact id cannot be empty"));
    }
    ContactId::from_str(trimmed).map_err(|_| invalid_input(format!("invalid contact id: {trimmed}")))
}

/// Accepts `+91` or `91`; the code must be in the dialing-code table.
pub fn parse_dialing_code(raw: &str) -> Result<&'static str> {
    let trimmed = raw.trim();
    let code = if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{trimmed}")
    };
    match dialing_code_index(&code) {
        Some(index) => Ok(DIALING_CODES[index].code),
        None => Err(CoreError::UnknownDialingCode(trimmed.to_string()).into()),
    }
}

/// Asks a y/n question on stderr and reads the answer from stdin.
pub fn confirm(prompt: &str) -> Result<bool> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{prompt} ")?;
    stderr.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
