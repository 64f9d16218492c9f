//! Reading prerequisite lists, and checking them before they reach the
//! graph code, which trusts its input.

use crate::error::{Error, Result};
use crate::utils::{divide_str, two_words};

#[allow(unused)]
use tracing::{debug, warn};

/// One `dependent,prerequisite` pair (whitespace works as separator too).
pub fn parse_pair(text: &str) -> Result<[usize; 2]> {
    parse_line(1, text)
}

fn parse_line(line: usize, text: &str) -> Result<[usize; 2]> {
    let (dependent, prerequisite) = divide_str(text, ',')
        .or_else(|| two_words(text))
        .ok_or_else(|| Error::invalid_pair(line, text))?;

    match (dependent.parse(), prerequisite.parse()) {
        (Ok(dependent), Ok(prerequisite)) => Ok([dependent, prerequisite]),
        _ => Err(Error::invalid_pair(line, text)),
    }
}

/// Parse a prerequisite list, either as JSON (`[[1,0],[2,0]]`) or one pair
/// per line. Blank lines and `#` comments are skipped in the line format.
pub fn parse_prerequisites(text: &str) -> Result<Vec<[usize; 2]>> {
    if text.trim_start().starts_with('[') {
        debug!("reading prerequisites as JSON");
        return Ok(serde_json::from_str(text)?);
    }

    let mut pairs = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        pairs.push(parse_line(index + 1, line)?);
    }
    Ok(pairs)
}

/// Every course id must be below `num_courses`.
pub fn validate(num_courses: usize, prerequisites: &[[usize; 2]]) -> Result<()> {
    for pair in prerequisites {
        if let Some(&course) = pair.iter().find(|&&course| course >= num_courses) {
            warn!("rejecting {:?}", pair);
            return Err(Error::CourseOutOfRange {
                course,
                num_courses,
            });
        }
    }
    Ok(())
}
