//! The command-reply job.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::domain::dedup;
use crate::error::Result;
use crate::port::Messaging;
use crate::scheduler::{Job, JobCadence};
use crate::service::command::CommandDispatcher;
use crate::service::watermark::{self, Watermark};

/// Polls for bot-command updates, answers each new one, and advances the
/// watermark.
pub struct ReplyService {
    config: Arc<Config>,
    messaging: Arc<dyn Messaging>,
    dispatcher: CommandDispatcher,
    watermark: Arc<Watermark>,
}

impl ReplyService {
    pub fn new(
        config: Arc<Config>,
        messaging: Arc<dyn Messaging>,
        dispatcher: CommandDispatcher,
        watermark: Arc<Watermark>,
    ) -> Self {
        Self {
            config,
            messaging,
            dispatcher,
            watermark,
        }
    }

    /// One poll cycle. The watermark lock is held for the whole
    /// read-poll-filter-advance sequence; the advance happens only after the
    /// entire batch was answered, so a mid-batch failure causes redelivery of
    /// the full batch on the next tick.
    pub async fn run_once(&self) -> Result<()> {
        let mut guard = self.watermark.lock().await;

        let batch = self.messaging.get_bot_command_updates(*guard).await?;
        let commands =
            dedup::screen_commands(batch.commands, *guard, &self.config.reply_allowed_chats());

        debug!(count = commands.len(), watermark = *guard, "replying to commands");
        for info in &commands {
            self.dispatcher
                .reply(&info.command, info.from_id, info.from_chat_id)
                .await?;
        }

        if let Some(last_update_id) = batch.last_update_id {
            watermark::advance(&mut guard, last_update_id);
        }

        Ok(())
    }
}

#[async_trait]
impl Job for ReplyService {
    fn name(&self) -> &'static str {
        "reply"
    }

    fn cadence(&self) -> JobCadence {
        JobCadence {
            lifetime: self.config.job_lifetime,
            tick: self.config.reply_tick,
        }
    }

    async fn run(&self) -> Result<()> {
        self.run_once().await
    }
}
