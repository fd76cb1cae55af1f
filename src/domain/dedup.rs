//! Update deduplication against the shared watermark.
//!
//! The messaging provider redelivers every update at or below the last
//! acknowledged offset, so the batch maximum is computed over *all* updates,
//! command or not, and the caller advances the watermark to it only after the
//! whole batch has been processed.

use crate::domain::update::{BotCommandInfo, Update};

/// Result of collecting commands out of one raw update batch.
#[derive(Debug, Clone, Default)]
pub struct CommandBatch {
    /// Maximum `update_id` observed across the whole batch, `None` for an
    /// empty batch.
    pub last_update_id: Option<i64>,
    /// Every extracted command, unfiltered.
    pub commands: Vec<BotCommandInfo>,
}

/// Extract bot commands from a raw batch and compute the batch maximum.
///
/// Updates that carry no command still contribute to `last_update_id`.
pub fn collect_commands(updates: &[Update], bot_name: &str) -> CommandBatch {
    let mut batch = CommandBatch::default();

    for update in updates {
        batch.last_update_id = Some(match batch.last_update_id {
            Some(max) => max.max(update.update_id),
            None => update.update_id,
        });

        if let Some(info) = update.command_info(bot_name) {
            batch.commands.push(info);
        }
    }

    batch
}

/// Screen extracted commands against the watermark and the chat allow-list.
///
/// Keeps only commands whose `update_id` is strictly greater than `watermark`
/// and whose originating chat is allowed. Pure and idempotent: screening the
/// same batch with the same watermark twice yields the same result.
pub fn screen_commands(
    commands: Vec<BotCommandInfo>,
    watermark: i64,
    allowed_chats: &[i64],
) -> Vec<BotCommandInfo> {
    commands
        .into_iter()
        .filter(|c| c.update_id > watermark && allowed_chats.contains(&c.from_chat_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::update::{CommandType, Message, MessageEntity, ENTITY_BOT_COMMAND};

    fn plain_update(update_id: i64) -> Update {
        Update {
            update_id,
            message: None,
        }
    }

    fn command_update(update_id: i64, chat_id: i64, text: &str) -> Update {
        Update {
            update_id,
            message: Some(Message {
                message_id: update_id * 10,
                from_id: Some(7),
                chat_id: Some(chat_id),
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
    fn non_commands_still_advance_the_maximum() {
        let updates = vec![
            command_update(10, -1, "/alive"),
            plain_update(12),
            plain_update(11),
        ];

        let batch = collect_commands(&updates, "@bot");
        assert_eq!(batch.last_update_id, Some(12));
        assert_eq!(batch.commands.len(), 1);
        assert_eq!(batch.commands[0].command, CommandType::Alive);
    }

    #[test]
    fn empty_batch_has_no_maximum() {
        let batch = collect_commands(&[], "@bot");
        assert_eq!(batch.last_update_id, None);
        assert!(batch.commands.is_empty());
    }

    #[test]
    fn screen_drops_at_or_below_watermark() {
        let updates = vec![
            command_update(5, -1, "/alive"),
            command_update(6, -1, "/help"),
            command_update(7, -1, "/depth"),
        ];
        let batch = collect_commands(&updates, "@bot");

        let kept = screen_commands(batch.commands, 6, &[-1]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].update_id, 7);
    }

    #[test]
    fn screen_drops_chats_outside_allow_list() {
        let updates = vec![
            command_update(5, -1, "/alive"),
            command_update(6, -2, "/alive"),
        ];
        let batch = collect_commands(&updates, "@bot");

        let kept = screen_commands(batch.commands, 0, &[-1]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].from_chat_id, -1);
    }

    #[test]
    fn screening_is_idempotent() {
        let updates = vec![
            command_update(5, -1, "/alive"),
            plain_update(9),
            command_update(6, -1, "/help"),
        ];

        let first = collect_commands(&updates, "@bot");
        let second = collect_commands(&updates, "@bot");
        assert_eq!(first.last_update_id, second.last_update_id);

        let kept_first = screen_commands(first.commands, 5, &[-1]);
        let kept_second = screen_commands(second.commands, 5, &[-1]);
        assert_eq!(kept_first, kept_second);
        assert_eq!(kept_first.len(), 1);
    }
}
