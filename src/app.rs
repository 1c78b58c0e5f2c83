use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{HttpMemeApiClient, RfdFilePicker};
use crate::core::models::{ThemeMode, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants;
use crate::presentation::app_theme;

pub struct MemeBoardApp {
    orchestrator: AppOrchestrator,
    theme_mode: ThemeMode,
}

impl MemeBoardApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        log::info!(
            "[APP] Using meme API at {} (timeout {:?})",
            settings.api_base_url,
            settings.request_timeout()
        );

        let api_client = Arc::new(HttpMemeApiClient::new(settings.clone()));
        let theme_mode = settings.theme_mode.clone();

        let orchestrator = AppOrchestrator::build(
            api_client.clone(),
            api_client.clone(),
            api_client,
            Arc::new(RfdFilePicker::new()),
            settings,
        );

        (
            Self {
                orchestrator,
                theme_mode,
            },
            Task::none(),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn current_theme(&self) -> Theme {
        app_theme::get_theme(&self.theme_mode)
    }

    /// The spinner only ticks while a search is in flight.
    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        if !self.orchestrator.is_loading() {
            return iced::Subscription::none();
        }

        iced::Subscription::run(|| {
            iced::stream::channel(
                10,
                |mut output: futures::channel::mpsc::Sender<OrchestratorMessage>| async move {
                    loop {
                        tokio::time::sleep(global_constants::SPINNER_TICK_INTERVAL).await;
                        if output.try_send(OrchestratorMessage::SpinnerTick).is_err() {
                            log::debug!("[APP] Spinner channel full, skipping frame");
                        }
                    }
                },
            )
        })
    }
}
