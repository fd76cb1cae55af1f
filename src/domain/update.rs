//! Inbound chat updates and bot-command extraction.

use chrono::{DateTime, Utc};

/// One inbound event from the messaging provider's polling endpoint.
///
/// `update_id` is assigned by the provider, monotonically increasing, and is
/// the deduplication watermark. Not every update carries a user message.
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// The message payload of an update, when present.
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub message_id: i64,
    pub from_id: Option<i64>,
    pub chat_id: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub text: Option<String>,
    pub entities: Vec<MessageEntity>,
}

/// An entity annotation on a message. A leading `bot_command` entity marks the
/// update as a command invocation.
#[derive(Debug, Clone)]
pub struct MessageEntity {
    pub kind: String,
    pub offset: i64,
    pub length: i64,
}

pub const ENTITY_BOT_COMMAND: &str = "bot_command";

/// A recognized bot command keyword.
///
/// Closed enumeration: every raw keyword maps to exactly one variant, with
/// `Unknown` as the catch-all, so dispatch is total by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandType {
    Alive,
    Help,
    Depth,
    Arbitrage,
    Unknown(String),
}

impl CommandType {
    /// Parse the raw message text of a command update.
    ///
    /// Strips the leading slash and a trailing bot-name mention, so both
    /// `/alive` and `/alive@spreadwatch_bot` resolve to [`CommandType::Alive`].
    pub fn parse(text: &str, bot_name: &str) -> Self {
        let keyword = text
            .strip_prefix('/')
            .unwrap_or(text)
            .strip_suffix(bot_name)
            .unwrap_or_else(|| text.strip_prefix('/').unwrap_or(text));

        match keyword {
            "alive" => Self::Alive,
            "help" => Self::Help,
            "depth" => Self::Depth,
            "arbitrage" => Self::Arbitrage,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Derived, filtered view of an [`Update`] that carries a bot command.
///
/// Produced only when the update has a message with a leading `bot_command`
/// entity, non-empty text, a known chat, and a known sender.
#[derive(Debug, Clone, PartialEq)]
pub struct BotCommandInfo {
    pub update_id: i64,
    pub message_id: i64,
    pub from_chat_id: i64,
    pub from_id: i64,
    pub command: CommandType,
    pub date: Option<DateTime<Utc>>,
}

impl Update {
    /// Extract the command carried by this update, if any.
    ///
    /// An update with no message, no text, no entities, a first entity that is
    /// not `bot_command`, a missing sender, or a missing chat yields `None`.
    pub fn command_info(&self, bot_name: &str) -> Option<BotCommandInfo> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref().filter(|t| !t.is_empty())?;
        let first_entity = message.entities.first()?;
        if first_entity.kind != ENTITY_BOT_COMMAND {
            return None;
        }
        let from_id = message.from_id?;
        let from_chat_id = message.chat_id?;

        Some(BotCommandInfo {
            update_id: self.update_id,
            message_id: message.message_id,
            from_chat_id,
            from_id,
            command: CommandType::parse(text, bot_name),
            date: message.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_update(update_id: i64, text: &str) -> Update {
        Update {
            update_id,
            message: Some(Message {
                message_id: 700,
                from_id: Some(42),
                chat_id: Some(-100),
                date: None,
                text: Some(text.to_string()),
                entities: vec![MessageEntity {
                    kind: ENTITY_BOT_COMMAND.to_string(),
                    offset: 0,
                    length: text.len() as i64,
                }],
            }),
        }
    }

    #[test]
    fn parse_strips_slash_and_bot_mention() {
        assert_eq!(
            CommandType::parse("/alive@gummy_s_bot", "@gummy_s_bot"),
            CommandType::Alive
        );
        assert_eq!(CommandType::parse("/alive", "@gummy_s_bot"), CommandType::Alive);
        assert_eq!(CommandType::parse("/help", "@bot"), CommandType::Help);
        assert_eq!(CommandType::parse("/depth", "@bot"), CommandType::Depth);
        assert_eq!(
            CommandType::parse("/arbitrage", "@bot"),
            CommandType::Arbitrage
        );
    }

    #[test]
    fn parse_unknown_keyword() {
        assert_eq!(
            CommandType::parse("/banana", "@bot"),
            CommandType::Unknown("banana".to_string())
        );
    }

    #[test]
    fn command_info_from_well_formed_update() {
        let info = command_update(926617503, "/alive@gummy_s_bot")
            .command_info("@gummy_s_bot")
            .unwrap();
        assert_eq!(info.update_id, 926617503);
        assert_eq!(info.from_id, 42);
        assert_eq!(info.from_chat_id, -100);
        assert_eq!(info.command, CommandType::Alive);
    }

    #[test]
    fn update_without_message_yields_nothing() {
        let update = Update {
            update_id: 1,
            message: None,
        };
        assert!(update.command_info("@bot").is_none());
    }

    #[test]
    fn update_without_command_entity_yields_nothing() {
        let mut update = command_update(1, "/alive");
        update.message.as_mut().unwrap().entities[0].kind = "mention".to_string();
        assert!(update.command_info("@bot").is_none());

        update.message.as_mut().unwrap().entities.clear();
        assert!(update.command_info("@bot").is_none());
    }

    #[test]
    fn update_without_text_sender_or_chat_yields_nothing() {
        let mut update = command_update(1, "/alive");
        update.message.as_mut().unwrap().text = None;
        assert!(update.command_info("@bot").is_none());

        let mut update = command_update(1, "/alive");
        update.message.as_mut().unwrap().from_id = None;
        assert!(update.command_info("@bot").is_none());

        let mut update = command_update(1, "/alive");
        update.message.as_mut().unwrap().chat_id = None;
        assert!(update.command_info("@bot").is_none());
    }
}
