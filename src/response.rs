//! Beget response envelope and API-reported errors.
//!
//! Every Beget call answers with the same two-level JSON document:
//!
//! ```json
//! {"status": "success",
//!  "answer": {"status": "success", "result": true, "errors": []}}
//! ```
//!
//! Failure can be signalled on either level, so [`Envelope::into_outcome`]
//! checks the outer status first, then the inner one, and only then hands
//! out the `result`. The client decodes `result` as raw JSON and converts
//! it to the caller's type only after a success, so a failed call is never
//! reported as a decoding error.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Code used when Beget reports a failure without a structured error body.
const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Status field found on both envelope levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// `"success"`, also assumed when the field is missing.
    #[default]
    Success,
    /// `"error"`.
    Error,
    /// Any value Beget may add later. Treated as "not an error".
    #[serde(other)]
    Other,
}

impl Status {
    /// Returns true for `"error"`.
    pub fn is_error(self) -> bool {
        self == Status::Error
    }
}

/// Error code as sent by Beget.
///
/// The API returns integer codes on some endpoints and string codes on
/// others. The wire representation is kept as-is: `42` and `"42"` are
/// different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    /// Numeric code, e.g. `42`.
    Int(i64),
    /// Symbolic code, e.g. `"INVALID_DATA"`.
    Text(String),
}

impl ErrorCode {
    /// Return the code as an integer, if it was sent as one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(code) => Some(*code),
            Self::Text(_) => None,
        }
    }

    /// Return the code as a string slice, if it was sent as one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(code) => Some(code),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(code) => write!(f, "{code}"),
            Self::Text(code) => f.write_str(code),
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self::Int(code)
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::Text(code.to_string())
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::Text(code)
    }
}

impl PartialEq<i64> for ErrorCode {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Self::Int(code) if code == other)
    }
}

impl PartialEq<str> for ErrorCode {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Self::Text(code) if code == other)
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// A single error reported by Beget.
///
/// Entries missing `error_code` get the `UNKNOWN_ERROR` code and entries
/// missing `error_text` get an empty text, so a partial error body still
/// surfaces as an API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {text}")]
pub struct ApiError {
    #[serde(
        rename = "error_code",
        default = "unknown_code",
        deserialize_with = "code_or_unknown"
    )]
    pub code: ErrorCode,
    #[serde(rename = "error_text", default, deserialize_with = "text_or_empty")]
    pub text: String,
}

fn unknown_code() -> ErrorCode {
    UNKNOWN_ERROR_CODE.into()
}

fn code_or_unknown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ErrorCode, D::Error> {
    Ok(Option::<ErrorCode>::deserialize(deserializer)?.unwrap_or_else(unknown_code))
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiError {
    /// Create an error from a code and a text.
    pub fn new(code: impl Into<ErrorCode>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }

    fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR_CODE, "request failed")
    }
}

/// All errors Beget reported for one failed call, in the order received.
///
/// Formats as `beget: <code>: <text>` for one error and joins several
/// with `", "`. Use [`ApiErrors::has_code`] or iterate to branch on
/// specific codes instead of parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrors(Vec<ApiError>);

impl ApiErrors {
    /// Wrap a list of errors.
    pub fn new(errors: Vec<ApiError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ApiError> {
        self.0.iter()
    }

    /// View the contained errors as a slice.
    pub fn as_slice(&self) -> &[ApiError] {
        &self.0
    }

    /// Take the contained errors.
    pub fn into_vec(self) -> Vec<ApiError> {
        self.0
    }

    /// Number of contained errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether any contained error carries `code`.
    ///
    /// ```
    /// use beget_client::{ApiError, ApiErrors};
    ///
    /// let errors = ApiErrors::new(vec![ApiError::new("INVALID_DATA", "Incorrect input data")]);
    /// assert!(errors.has_code("INVALID_DATA"));
    /// assert!(!errors.has_code(&42_i64));
    /// ```
    pub fn has_code<C>(&self, code: &C) -> bool
    where
        C: ?Sized,
        ErrorCode: PartialEq<C>,
    {
        self.0.iter().any(|e| e.code.eq(code))
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("beget: unknown error");
        }

        f.write_str("beget: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiErrors {}

impl From<Vec<ApiError>> for ApiErrors {
    fn from(errors: Vec<ApiError>) -> Self {
        Self(errors)
    }
}

impl From<ApiError> for ApiErrors {
    fn from(error: ApiError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ApiErrors {
    type Item = ApiError;
    type IntoIter = std::vec::IntoIter<ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ApiErrors {
    type Item = &'a ApiError;
    type IntoIter = std::slice::Iter<'a, ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outer level of a Beget response.
///
/// The outer level may carry its own `error_code`/`error_text` (e.g. on
/// authentication failures), in which case `answer` is usually absent.
/// `T` defaults to raw JSON so the status fields can be checked before the
/// result is given a shape.
#[derive(Debug, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Outer status.
    pub status: Status,
    /// Operation-level answer.
    #[serde(default = "Option::default")]
    pub answer: Option<Answer<T>>,
    /// Outer error code, if the outer level failed with one.
    #[serde(default)]
    pub error_code: Option<ErrorCode>,
    /// Outer error text, if the outer level failed with one.
    #[serde(default)]
    pub error_text: Option<String>,
}

/// Inner `answer` level of a Beget response.
#[derive(Debug, Deserialize)]
pub struct Answer<T = serde_json::Value> {
    /// Operation status.
    #[serde(default)]
    pub status: Status,
    /// Operation result, absent on failure.
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    /// Errors reported for the operation. `null` is treated as empty.
    #[serde(default)]
    pub errors: Option<Vec<ApiError>>,
}

/// What an envelope resolved to once its status fields were checked.
#[derive(Debug, PartialEq)]
pub enum Outcome<T> {
    /// Both levels reported success. `None` if Beget omitted `result`.
    Success(Option<T>),
    /// Either level reported failure. Never empty.
    Failure(ApiErrors),
}

impl<T> Envelope<T> {
    /// Split the envelope into its typed result or the reported errors.
    pub fn into_outcome(self) -> Outcome<T> {
        let (answer_status, errors, result) = match self.answer {
            Some(answer) => (answer.status, answer.errors.unwrap_or_default(), answer.result),
            None => (Status::Success, Vec::new(), None),
        };

        match failure(
            self.status,
            self.error_code,
            self.error_text,
            answer_status,
            errors,
        ) {
            Some(errors) => Outcome::Failure(errors),
            None => Outcome::Success(result),
        }
    }
}

/// Decide whether the status fields describe a failure.
///
/// Independent of the result type so the rule lives in one place.
fn failure(
    outer: Status,
    error_code: Option<ErrorCode>,
    error_text: Option<String>,
    inner: Status,
    errors: Vec<ApiError>,
) -> Option<ApiErrors> {
    if outer.is_error() {
        if error_code.is_some() || error_text.is_some() {
            let error = ApiError {
                code: error_code.unwrap_or_else(|| UNKNOWN_ERROR_CODE.into()),
                text: error_text.unwrap_or_else(|| "unknown error".to_string()),
            };
            return Some(error.into());
        }
        return Some(non_empty(errors));
    }

    if inner.is_error() {
        return Some(non_empty(errors));
    }

    None
}

fn non_empty(errors: Vec<ApiError>) -> ApiErrors {
    if errors.is_empty() {
        ApiError::unknown().into()
    } else {
        ApiErrors(errors)
    }
}
