//! Result type alias for Labnotes
//!
//! This module provides a convenient Result type alias that uses LabNotesError
//! as the error type.

use super::errors::LabNotesError;

/// Result type alias for Labnotes operations
///
/// # Examples
///
/// ```
/// use labnotes::domain::result::Result;
/// use labnotes::domain::errors::LabNotesError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LabNotesError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LabNotesError>;
