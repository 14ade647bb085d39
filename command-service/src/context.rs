//! Application context: builds, initializes and owns the process's single [`CommandService`].

use crate::command::Command;
use crate::outbound::Outbound;
use crate::service::CommandService;
use chatr_core::{CommandSettings, DispatchError};
use std::sync::Arc;
use tracing::info;

/// Constructed once at startup and passed to everything that dispatches messages.
#[derive(Clone)]
pub struct AppContext {
    settings: CommandSettings,
    service: Arc<CommandService>,
}

impl AppContext {
    /// Runs the whole startup sequence: initialize with the configured delimiters, register `commands` in
    /// order (rejected ones are reported on `outbound` and skipped), then mark the service ready.
    pub fn bootstrap<I>(
        settings: CommandSettings,
        outbound: Arc<dyn Outbound>,
        commands: I,
    ) -> Result<Self, DispatchError>
    where
        I: IntoIterator<Item = Arc<dyn Command>>,
    {
        let service = CommandService::new(outbound).with_bot_filter(settings.ignore_bot_messages);
        service.initialize(&settings.prefix, &settings.terminator)?;
        let registered = service.register_all(commands);
        service.finish_discovery()?;
        info!(
            registered = registered,
            nickname = %settings.nickname,
            "step: application context ready"
        );
        Ok(Self {
            settings,
            service: Arc::new(service),
        })
    }

    pub fn settings(&self) -> &CommandSettings {
        &self.settings
    }

    pub fn service(&self) -> &Arc<CommandService> {
        &self.service
    }
}
