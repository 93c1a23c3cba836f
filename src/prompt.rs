use std::io::{BufRead, Write};

use log::debug;

use crate::data::model::{SortKey, YearFilter, LAST_YEAR};
use crate::error::PromptError;

pub const YEAR_PROMPT: &str = "Please enter the year: 0 (for all years), 1, 2, 3, 4: ";
pub const SORT_PROMPT: &str =
    "Choose sorting method: 1 (by course title) or 2 (by course code): ";
pub const RETRY_MESSAGE: &str = "Sorry, your input was not valid. Please try again. ";

/// Ask until the operator enters a single integer in `min..=max`.
///
/// Leading whitespace is allowed; anything after the number on the same
/// line (`2x`, `2 3`, `2 `) rejects the answer. There is no retry limit.
pub fn prompt_bounded_integer<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: i32,
    max: i32,
) -> Result<i32, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        match parse_bounded(&line, min, max) {
            Some(value) => return Ok(value),
            None => {
                debug!("rejected operator input {line:?} (expected {min}..={max})");
                writeln!(output, "{RETRY_MESSAGE}")?;
            }
        }
    }
}

/// Validate one raw input line, including its line terminator.
fn parse_bounded(line: &str, min: i32, max: i32) -> Option<i32> {
    let body = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    let token = body.trim_start();
    if token.is_empty() {
        return None;
    }
    token
        .parse::<i32>()
        .ok()
        .filter(|value| (min..=max).contains(value))
}

/// Ask for the academic year, `0` meaning all years.
pub fn ask_year_filter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<YearFilter, PromptError> {
    let choice = prompt_bounded_integer(input, output, YEAR_PROMPT, 0, LAST_YEAR)?;
    Ok(YearFilter::try_from(choice)?)
}

/// Ask how the listing should be ordered.
pub fn ask_sort_key<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SortKey, PromptError> {
    let choice = prompt_bounded_integer(input, output, SORT_PROMPT, 1, 2)?;
    Ok(SortKey::try_from(choice)?)
}
