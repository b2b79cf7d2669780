//! Tri-state progress envelope for asynchronous reads.

/// The state of a data operation as observed by a screen.
///
/// Repositories emit a short sequence of these per call: `Loading(true)`,
/// then either `Success` or `Error`, then `Loading(false)`. The payload of
/// `Success` is optional; a `Success(None)` emission carries no data and
/// must leave screen state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// Loading started (`true`) or ended (`false`).
    Loading(bool),
    /// The operation produced a result, possibly empty.
    Success(Option<T>),
    /// The operation failed; the message is user-facing and static.
    Error(String),
}

impl<T> Resource<T> {
    /// The success payload, if this is a `Success` carrying data.
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => data.as_ref(),
            _ => None,
        }
    }
}
