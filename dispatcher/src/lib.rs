//! # Dispatcher
//!
//! Routes each inbound update to exactly one handler: commands to the start handler, photos and
//! image documents to the image handler, everything else to the rejection handler.

use relay_core::{Handler, HandlerResponse, InboundUpdate, Result, UpdateKind};
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};

/// Which handler an update goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Start,
    Image,
    Rejection,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Start => "start",
            Route::Image => "image",
            Route::Rejection => "rejection",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds one handler per route.
#[derive(Clone)]
pub struct Dispatcher {
    start: Arc<dyn Handler>,
    image: Arc<dyn Handler>,
    rejection: Arc<dyn Handler>,
}

impl Dispatcher {
    pub fn new(start: Arc<dyn Handler>, image: Arc<dyn Handler>, rejection: Arc<dyn Handler>) -> Self {
        Self {
            start,
            image,
            rejection,
        }
    }

    /// Picks the route for an update. Documents only go to the image handler when their declared
    /// MIME type is `image/*`.
    pub fn route(update: &InboundUpdate) -> Route {
        match &update.kind {
            UpdateKind::Command(_) => Route::Start,
            UpdateKind::Photo(_) => Route::Image,
            UpdateKind::ImageDocument { .. } if update.image_file().is_some() => Route::Image,
            UpdateKind::ImageDocument { .. } => Route::Rejection,
            UpdateKind::Other => Route::Rejection,
        }
    }

    fn handler_for(&self, route: Route) -> &Arc<dyn Handler> {
        match route {
            Route::Start => &self.start,
            Route::Image => &self.image,
            Route::Rejection => &self.rejection,
        }
    }

    /// Runs the single handler for this update's route.
    #[instrument(skip(self, update))]
    pub async fn dispatch(&self, update: &InboundUpdate) -> Result<HandlerResponse> {
        let route = Self::route(update);
        info!(
            user_id = update.user.id,
            chat_id = update.chat.id,
            update_id = %update.id,
            kind = update.kind.label(),
            route = %route,
            "step: dispatch"
        );

        let response = self.handler_for(route).handle(update).await?;

        let (response_type, size) = match &response {
            HandlerResponse::Photo(n) => ("Photo", *n),
            HandlerResponse::Reply(s) => ("Reply", s.len()),
        };
        info!(
            user_id = update.user.id,
            route = %route,
            response_type = %response_type,
            size,
            "step: dispatch done"
        );
        Ok(response)
    }
}

// Tests live in tests/dispatcher_test.rs
