//! Wiring: build the HTTP clients and adapters, seed the watermark, and run
//! both jobs to completion.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::adapter::comparison::ComparisonClient;
use crate::adapter::telegram::TelegramClient;
use crate::config::Config;
use crate::error::Result;
use crate::port::{Messaging, Quotes};
use crate::scheduler::{self, Job};
use crate::service::command::CommandDispatcher;
use crate::service::notify::NotifyService;
use crate::service::reply::ReplyService;
use crate::service::watermark::Watermark;
use crate::service::AdminFailureReporter;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct App;

impl App {
    /// Run until both job lifetimes expire.
    pub async fn run(config: Config) -> Result<()> {
        let http = Client::builder().timeout(HTTP_TIMEOUT).build()?;

        let messaging: Arc<dyn Messaging> = Arc::new(TelegramClient::new(
            http.clone(),
            &config.bot_token,
            config.bot_name.clone(),
            config.author_id,
            config.author.clone(),
        ));
        let quotes: Arc<dyn Quotes> = Arc::new(ComparisonClient::new(http));

        // Seeding is startup-fatal: without a baseline the reply job would
        // answer the entire buffered backlog.
        let watermark = Arc::new(Watermark::seed(messaging.as_ref()).await?);

        info!(port = config.port, env = ?config.environment, "spreadwatch configured");

        let config = Arc::new(config);
        let dispatcher = CommandDispatcher::new(
            Arc::clone(&config),
            Arc::clone(&messaging),
            Arc::clone(&quotes),
        );

        let reply = ReplyService::new(
            Arc::clone(&config),
            Arc::clone(&messaging),
            dispatcher,
            watermark,
        );
        let notify = NotifyService::new(
            Arc::clone(&config),
            Arc::clone(&messaging),
            Arc::clone(&quotes),
        );

        let reporter = Arc::new(AdminFailureReporter::new(
            Arc::clone(&messaging),
            config.admin_chat_id,
        ));

        let jobs: Vec<Arc<dyn Job>> = vec![Arc::new(reply), Arc::new(notify)];
        scheduler::run_jobs(jobs, reporter).await;

        Ok(())
    }
}
