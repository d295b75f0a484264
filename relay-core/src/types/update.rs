//! Inbound update: the closed union the dispatcher matches on.

use super::{chat::Chat, user::User};

/// Explicit bot commands. `/help` is answered exactly like `/start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
}

/// Platform reference usable to fetch a file's raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub file_id: String,
    /// Size declared by the platform, if any.
    pub size: Option<u32>,
}

impl FileRef {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            size: None,
        }
    }
}

/// Content kind of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    Command(Command),
    Photo(FileRef),
    /// A document attachment. The MIME type is carried as declared; it may be absent or non-image,
    /// in which case the update is rejected without any network call.
    ImageDocument {
        file: FileRef,
        mime_type: Option<String>,
    },
    Other,
}

impl UpdateKind {
    /// Builds the kind from the parts found on a platform message, applying precedence:
    /// command > photo > document > other.
    pub fn classify(
        command: Option<Command>,
        photo: Option<FileRef>,
        document: Option<(FileRef, Option<String>)>,
    ) -> Self {
        if let Some(command) = command {
            return UpdateKind::Command(command);
        }
        if let Some(file) = photo {
            return UpdateKind::Photo(file);
        }
        if let Some((file, mime_type)) = document {
            return UpdateKind::ImageDocument { file, mime_type };
        }
        UpdateKind::Other
    }

    /// Short label used as a structured log field.
    pub fn label(&self) -> &'static str {
        match self {
            UpdateKind::Command(_) => "command",
            UpdateKind::Photo(_) => "photo",
            UpdateKind::ImageDocument { .. } => "document",
            UpdateKind::Other => "other",
        }
    }
}

/// True if a declared MIME type names an image (`image/...`).
pub(crate) fn is_image_mime(mime_type: Option<&str>) -> bool {
    mime_type.is_some_and(|m| m.to_ascii_lowercase().starts_with("image/"))
}

/// A single inbound event from the chat platform, converted once at the boundary.
#[derive(Debug, Clone)]
pub struct InboundUpdate {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: UpdateKind,
}

impl InboundUpdate {
    pub fn new(id: impl Into<String>, user: User, chat: Chat, kind: UpdateKind) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            kind,
        }
    }

    /// The file to forward for inference: a photo, or a document whose MIME type is `image/*`.
    /// None for every other kind, including documents with a missing or non-image MIME type.
    pub fn image_file(&self) -> Option<&FileRef> {
        match &self.kind {
            UpdateKind::Photo(file) => Some(file),
            UpdateKind::ImageDocument { file, mime_type } if is_image_mime(mime_type.as_deref()) => {
                Some(file)
            }
            _ => None,
        }
    }
}
