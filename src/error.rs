use std::io;
use thiserror::Error;

/// Errors at the input boundary. Ordering itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A line or argument that is not a `dependent,prerequisite` pair
    #[error("line {line}: expected `dependent,prerequisite`, got {text:?}")]
    InvalidPair { line: usize, text: String },

    /// Course id outside `0..num_courses`
    #[error("course {course} out of range, only {num_courses} courses")]
    CourseOutOfRange { course: usize, num_courses: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_pair<S: Into<String>>(line: usize, text: S) -> Self {
        Error::InvalidPair {
            line,
            text: text.into(),
        }
    }
}
