//! Handler result type.

/// What a handler sent back for one update. Every handled update produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// A processed image was sent; carries its size in bytes.
    Photo(usize),
    /// A fixed text reply was sent.
    Reply(String),
}
