//! User-facing reply texts. Users only ever see these or a processed image.

/// Reply to `/start` and `/help`.
pub const MSG_START: &str = "👋 Send me a photo and I will mark the people in it.";

/// Reply when the file could not be fetched or inference failed.
pub const MSG_INFERENCE_FAILED: &str = "⚠️ Inference error, please try again later.";

/// Reply to anything that is not a photo or an image document.
pub const MSG_SEND_IMAGE: &str = "📸 Please send an image.";
