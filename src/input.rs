use crate::LwError;
use std::io::{self, Write};

/// Print a prompt without a newline, flush, and read one line from
/// stdin. Returns `None` on end-of-input. The line terminator is kept;
/// newline policy is applied later by [`Record::from_line`].
///
/// [`Record::from_line`]: crate::Record::from_line
pub fn prompt_line(prompt: &str) -> Result<Option<String>, LwError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    let n = io::stdin().read_line(&mut input)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}
