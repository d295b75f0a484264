//! Adapters from Telegram (teloxide) types to relay_core types.
//! The update kind is decided here, once; everything downstream matches on [`UpdateKind`].

use relay_core::{Chat, Command, FileRef, InboundUpdate, ToInboundUpdate, UpdateKind, User};
use teloxide::utils::command::BotCommands;

/// Commands the bot understands. Anything else starting with `/` is ordinary content.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum TelegramCommand {
    #[command(description = "Show instructions.")]
    Start,
    #[command(description = "Same as /start.")]
    Help,
}

impl From<TelegramCommand> for Command {
    fn from(cmd: TelegramCommand) -> Self {
        match cmd {
            TelegramCommand::Start => Command::Start,
            TelegramCommand::Help => Command::Help,
        }
    }
}

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_user(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to an [`InboundUpdate`].
///
/// `bot_username` is used to accept `/start@ThisBot` and ignore commands addressed to other bots.
pub struct TelegramMessageWrapper<'a> {
    msg: &'a teloxide::types::Message,
    bot_username: Option<&'a str>,
}

impl<'a> TelegramMessageWrapper<'a> {
    pub fn new(msg: &'a teloxide::types::Message, bot_username: Option<&'a str>) -> Self {
        Self { msg, bot_username }
    }

    /// Command from the first word of the text, or of the caption for media messages.
    fn command(&self) -> Option<Command> {
        let text = self.msg.text().or_else(|| self.msg.caption())?;
        let first = text.split_whitespace().next()?;
        TelegramCommand::parse(first, self.bot_username.unwrap_or(""))
            .ok()
            .map(Command::from)
    }

    /// Largest photo size; Telegram lists sizes smallest first.
    fn photo(&self) -> Option<FileRef> {
        self.msg.photo()?.last().map(|p| FileRef {
            file_id: p.file.id.0.clone(),
            size: Some(p.file.size),
        })
    }

    fn document(&self) -> Option<(FileRef, Option<String>)> {
        self.msg.document().map(|doc| {
            (
                FileRef {
                    file_id: doc.file.id.0.clone(),
                    size: Some(doc.file.size),
                },
                doc.mime_type.as_ref().map(ToString::to_string),
            )
        })
    }

    fn chat_type(&self) -> &'static str {
        let chat = &self.msg.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else {
            "channel"
        }
    }
}

impl<'a> ToInboundUpdate for TelegramMessageWrapper<'a> {
    fn to_update(&self) -> InboundUpdate {
        let user = self
            .msg
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_user())
            .unwrap_or_else(User::unknown);
        let chat = Chat {
            id: self.msg.chat.id.0,
            chat_type: self.chat_type().to_string(),
        };
        let kind = UpdateKind::classify(self.command(), self.photo(), self.document());
        InboundUpdate::new(self.msg.id.to_string(), user, chat, kind)
    }
}
