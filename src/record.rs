use crate::Int;
use std::fmt;

/// Characters retained from the name line. One more byte held the
/// terminator in the original fixed-size buffer.
pub const NAME_MAX: usize = 99;

/// The one piece of state the program manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: Int,
    pub name: String,
}

impl Record {
    /// Build a record from a raw stdin line. The trailing line terminator
    /// is stripped unless `keep_newline`; the result is capped at
    /// [`NAME_MAX`] characters.
    pub fn from_line(line: &str, id: Int, keep_newline: bool) -> Self {
        let name = if keep_newline {
            line
        } else {
            line.trim_end_matches(['\r', '\n'])
        };
        Self {
            id,
            name: name.chars().take(NAME_MAX).collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instance name: {}\nid: {}", self.name, self.id)
    }
}

/// Render the interrupt report for whatever the holder currently stores.
pub fn report(record: Option<&Record>) -> String {
    match record {
        Some(rec) => rec.to_string(),
        None => String::from("no instance registered"),
    }
}

/// Loose id parse, `atoi` style: optional leading whitespace, optional
/// sign, then leading digits. Non-numeric input yields 0; overflow
/// saturates.
pub fn parse_id(text: &str) -> Int {
    let rest = text.trim_start();
    let (sign, digits) = match rest.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let mut value: Int = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(sign * d as Int);
    }
    value
}
