//! Chat identity type for inbound updates.

/// Chat (private, group or channel) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
