use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The generator flagged its own output as unusable; no heuristic
    /// parsing should mask that.
    #[error("response contains the [unformatted question] marker")]
    UnformattedResponse,
}
