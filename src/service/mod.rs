//! Job bodies and shared state: command dispatch, the reply and notify jobs,
//! the update watermark, and admin failure escalation.

pub mod command;
pub mod notify;
pub mod reply;
pub mod watermark;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Error;
use crate::port::Messaging;
use crate::scheduler::FailureReporter;

/// Escalates failed job invocations to the admin chat.
///
/// A failed escalation send is logged and swallowed; it must never take the
/// job loop down with it.
pub struct AdminFailureReporter {
    messaging: Arc<dyn Messaging>,
    admin_chat_id: i64,
}

impl AdminFailureReporter {
    pub fn new(messaging: Arc<dyn Messaging>, admin_chat_id: i64) -> Self {
        Self {
            messaging,
            admin_chat_id,
        }
    }
}

#[async_trait]
impl FailureReporter for AdminFailureReporter {
    async fn report(&self, job: &str, error: &Error) {
        if let Err(send_err) = self
            .messaging
            .send_error_notify(self.admin_chat_id, job, &error.to_string())
            .await
        {
            warn!(job, error = %send_err, "failed to send admin error notification");
        }
    }
}
