//! Handler trait and transport conversion trait.

use async_trait::async_trait;

use super::{response::HandlerResponse, update::InboundUpdate};

/// Converts a transport-specific message into an [`InboundUpdate`], once, at the platform boundary.
pub trait ToInboundUpdate: Send + Sync {
    fn to_update(&self) -> InboundUpdate;
}

/// A handler bound to one update kind; responsible for sending exactly one reply.
///
/// Per-update failures (file fetch, inference) are handled inside and turned into a reply. An `Err`
/// means the reply itself could not be delivered.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, update: &InboundUpdate) -> crate::error::Result<HandlerResponse>;
}
