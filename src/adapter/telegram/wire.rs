//! Serde models for the Bot API JSON surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::update::{Message, MessageEntity, Update};

#[derive(Debug, Deserialize)]
pub struct GetUpdatesResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Vec<WireUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct WireUpdate {
    pub update_id: i64,
    pub message: Option<WireMessage>,
}

#[derive(Debug, Deserialize)]
pub struct WireMessage {
    pub message_id: i64,
    pub from: Option<WireUser>,
    pub chat: Option<WireChat>,
    pub date: Option<i64>,
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<WireEntity>,
}

#[derive(Debug, Deserialize)]
pub struct WireUser {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct WireChat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct WireEntity {
    pub offset: i64,
    pub length: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageBody<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    pub description: Option<String>,
}

impl From<WireUpdate> for Update {
    fn from(wire: WireUpdate) -> Self {
        Self {
            update_id: wire.update_id,
            message: wire.message.map(Message::from),
        }
    }
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        let date: Option<DateTime<Utc>> =
            wire.date.and_then(|secs| DateTime::from_timestamp(secs, 0));
        Self {
            message_id: wire.message_id,
            from_id: wire.from.map(|u| u.id),
            chat_id: wire.chat.map(|c| c.id),
            date,
            text: wire.text,
            entities: wire
                .entities
                .into_iter()
                .map(|e| MessageEntity {
                    kind: e.kind,
                    offset: e.offset,
                    length: e.length,
                })
                .collect(),
        }
    }
}
