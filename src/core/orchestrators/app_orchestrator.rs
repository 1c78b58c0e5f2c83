use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Color, Element, Length, Task};

use crate::core::interfaces::adapters::{
    FilePicker, MemeImageLoader, MemeSearchService, MemeUploadService,
};
use crate::core::models::{
    MemeBoard, MemeRecord, NoticeId, SearchTicket, SelectedFile, UploadKind, UserSettings,
};
use crate::global_constants;
use crate::presentation::{app_theme, ResultGridView};

pub struct AppOrchestrator {
    search_service: Arc<dyn MemeSearchService>,
    upload_service: Arc<dyn MemeUploadService>,
    image_loader: Arc<dyn MemeImageLoader>,
    file_picker: Arc<dyn FilePicker>,
    board: MemeBoard,
    result_grid: ResultGridView,
    settings: UserSettings,
    spinner_frame: usize,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    QueryChanged(String),
    SubmitSearch,
    SearchCompleted(SearchTicket, Result<Vec<MemeRecord>, String>),
    MemeImageLoaded(u64, usize, Result<Vec<u8>, String>),
    PickFile(UploadKind),
    FilePicked(UploadKind, Result<Option<SelectedFile>, String>),
    UploadCompleted(UploadKind, Result<(), String>),
    NoticeExpired(NoticeId),
    SpinnerTick,
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::QueryChanged(query) => write!(f, "QueryChanged({:?})", query),
            OrchestratorMessage::SubmitSearch => write!(f, "SubmitSearch"),
            OrchestratorMessage::SearchCompleted(ticket, result) => write!(
                f,
                "SearchCompleted(#{}, {:?})",
                ticket.sequence,
                result.as_ref().map(|records| records.len())
            ),
            OrchestratorMessage::MemeImageLoaded(generation, index, result) => write!(
                f,
                "MemeImageLoaded(#{}, {}, {:?})",
                generation,
                index,
                result.is_ok()
            ),
            OrchestratorMessage::PickFile(kind) => write!(f, "PickFile({})", kind),
            OrchestratorMessage::FilePicked(kind, result) => {
                write!(f, "FilePicked({}, {:?})", kind, result)
            }
            OrchestratorMessage::UploadCompleted(kind, result) => {
                write!(f, "UploadCompleted({}, {:?})", kind, result)
            }
            OrchestratorMessage::NoticeExpired(id) => write!(f, "NoticeExpired({:?})", id),
            OrchestratorMessage::SpinnerTick => write!(f, "SpinnerTick"),
        }
    }
}

/// Resolves with the expiry message for `id` once `after` has elapsed.
pub async fn wait_for_notice_expiry(id: NoticeId, after: Duration) -> OrchestratorMessage {
    tokio::time::sleep(after).await;
    OrchestratorMessage::NoticeExpired(id)
}

impl AppOrchestrator {
    pub fn build(
        search_service: Arc<dyn MemeSearchService>,
        upload_service: Arc<dyn MemeUploadService>,
        image_loader: Arc<dyn MemeImageLoader>,
        file_picker: Arc<dyn FilePicker>,
        settings: UserSettings,
    ) -> Self {
        Self {
            search_service,
            upload_service,
            image_loader,
            file_picker,
            board: MemeBoard::new(),
            result_grid: ResultGridView::new(),
            settings,
            spinner_frame: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.board.is_loading()
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        if !matches!(message, OrchestratorMessage::SpinnerTick) {
            log::info!("[ORCHESTRATOR] Received message: {:?}", message);
        }

        match message {
            OrchestratorMessage::QueryChanged(query) => {
                self.board.set_query(query);
            }
            OrchestratorMessage::SubmitSearch => {
                return Task::future(self.start_search());
            }
            OrchestratorMessage::SearchCompleted(ticket, result) => {
                return self.handle_search_completed(ticket, result);
            }
            OrchestratorMessage::MemeImageLoaded(generation, index, result) => {
                self.result_grid.apply_image(generation, index, result);
            }
            OrchestratorMessage::PickFile(kind) => {
                return self.handle_pick_file(kind);
            }
            OrchestratorMessage::FilePicked(kind, result) => {
                return self.handle_file_picked(kind, result);
            }
            OrchestratorMessage::UploadCompleted(kind, result) => {
                return self.handle_upload_completed(kind, result);
            }
            OrchestratorMessage::NoticeExpired(id) => {
                if !self.board.expire_notice(id) {
                    log::debug!("[ORCHESTRATOR] Notice {:?} already replaced", id);
                }
            }
            OrchestratorMessage::SpinnerTick => {
                self.spinner_frame =
                    (self.spinner_frame + 1) % global_constants::SPINNER_FRAMES.len();
            }
        }

        Task::none()
    }

    fn start_search(&mut self) -> impl Future<Output = OrchestratorMessage> + Send + 'static {
        let ticket = self.board.begin_search();
        log::info!(
            "[ORCHESTRATOR] Starting search #{} for {:?}",
            ticket.sequence,
            ticket.query
        );

        let search_service = Arc::clone(&self.search_service);
        let timeout_duration = self.settings.request_timeout();

        async move {
            let search_future = search_service.search_memes(&ticket.query);

            let result = match tokio::time::timeout(timeout_duration, search_future).await {
                Ok(Ok(records)) => Ok(records),
                Ok(Err(e)) => {
                    log::error!("[ORCHESTRATOR] Search #{} failed: {:#}", ticket.sequence, e);
                    Err(e.to_string())
                }
                Err(_) => {
                    log::error!(
                        "[ORCHESTRATOR] Search #{} timed out after {:?}",
                        ticket.sequence,
                        timeout_duration
                    );
                    Err(format!("Search timed out after {:?}", timeout_duration))
                }
            };

            OrchestratorMessage::SearchCompleted(ticket, result)
        }
    }

    fn handle_search_completed(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<MemeRecord>, String>,
    ) -> Task<OrchestratorMessage> {
        let succeeded = result.is_ok();

        if !self.board.settle_search(&ticket, result) {
            log::info!(
                "[ORCHESTRATOR] Search #{} was superseded, ignoring its response",
                ticket.sequence
            );
            return Task::none();
        }

        if !succeeded {
            return Task::none();
        }

        self.result_grid
            .replace_records(ticket.sequence, self.board.results());
        self.load_card_images(ticket.sequence)
    }

    fn load_card_images(&self, generation: u64) -> Task<OrchestratorMessage> {
        let timeout_duration = self.settings.request_timeout();

        let tasks = self
            .board
            .results()
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let image_loader = Arc::clone(&self.image_loader);
                let url = record.url.clone();
                Task::future(async move {
                    let load_future = image_loader.load_image_bytes(&url);
                    let result = match tokio::time::timeout(timeout_duration, load_future).await {
                        Ok(loaded) => loaded.map_err(|e| e.to_string()),
                        Err(_) => Err(format!("Image timed out after {:?}", timeout_duration)),
                    };
                    OrchestratorMessage::MemeImageLoaded(generation, index, result)
                })
            })
            .collect::<Vec<_>>();

        Task::batch(tasks)
    }

    fn handle_pick_file(&mut self, kind: UploadKind) -> Task<OrchestratorMessage> {
        let file_picker = Arc::clone(&self.file_picker);

        Task::future(async move {
            let result = file_picker.pick_file(kind).await.map_err(|e| {
                log::error!("[ORCHESTRATOR] Could not read {} file: {:#}", kind, e);
                e.to_string()
            });
            OrchestratorMessage::FilePicked(kind, result)
        })
    }

    fn handle_file_picked(
        &mut self,
        kind: UploadKind,
        result: Result<Option<SelectedFile>, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(picked) => match self.start_upload(kind, picked) {
                Some(upload) => Task::future(upload),
                None => Task::none(),
            },
            Err(_) => {
                self.board.reject_upload(kind);
                Task::none()
            }
        }
    }

    /// Dispatches an upload for the picked file. No file, no request.
    fn start_upload(
        &mut self,
        kind: UploadKind,
        picked: Option<SelectedFile>,
    ) -> Option<impl Future<Output = OrchestratorMessage> + Send + 'static> {
        let Some(file) = picked else {
            log::debug!("[ORCHESTRATOR] No {} file selected, nothing to upload", kind);
            return None;
        };

        self.board.begin_upload(kind);

        let upload_service = Arc::clone(&self.upload_service);
        let timeout_duration = self.settings.request_timeout();

        Some(async move {
            let upload_future = upload_service.upload_file(kind, &file);

            let result = match tokio::time::timeout(timeout_duration, upload_future).await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => {
                    log::error!("[ORCHESTRATOR] {} upload failed: {:#}", kind, e);
                    Err(e.to_string())
                }
                Err(_) => {
                    log::error!(
                        "[ORCHESTRATOR] {} upload timed out after {:?}",
                        kind,
                        timeout_duration
                    );
                    Err(format!("Upload timed out after {:?}", timeout_duration))
                }
            };

            OrchestratorMessage::UploadCompleted(kind, result)
        })
    }

    fn handle_upload_completed(
        &mut self,
        kind: UploadKind,
        result: Result<(), String>,
    ) -> Task<OrchestratorMessage> {
        match self.board.settle_upload(kind, result) {
            Some(notice_id) => Task::future(wait_for_notice_expiry(
                notice_id,
                global_constants::SUCCESS_NOTICE_DURATION,
            )),
            None => Task::none(),
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let dataset_btn = button(
            row![text("📤").size(18), text("Upload Dataset").size(15)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .padding([8, 16])
        .style(app_theme::primary_button_style)
        .on_press(OrchestratorMessage::PickFile(UploadKind::Dataset));

        let meme_btn = button(
            row![text("📤").size(18), text("Upload Meme").size(15)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .padding([8, 16])
        .style(app_theme::secondary_button_style)
        .on_press(OrchestratorMessage::PickFile(UploadKind::Meme));

        let top_bar = row![dataset_btn, Space::new().width(Length::Fill), meme_btn]
            .align_y(Alignment::Center)
            .width(Length::Fill);

        let search_form = container(
            row![
                text_input(global_constants::SEARCH_PLACEHOLDER, self.board.query())
                    .on_input(OrchestratorMessage::QueryChanged)
                    .on_submit(OrchestratorMessage::SubmitSearch)
                    .padding(12)
                    .size(16),
                button(text("🔍").size(20))
                    .padding([8, 12])
                    .style(app_theme::search_button_style)
                    .on_press(OrchestratorMessage::SubmitSearch),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .max_width(672)
        .center_x(Length::Fill);

        let mut content = column![
            top_bar,
            Space::new().height(Length::Fixed(48.0)),
            search_form,
            Space::new().height(Length::Fixed(48.0)),
        ]
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill);

        if let Some(error) = self.board.error_message() {
            content = content.push(self.render_status_line(error, app_theme::ERROR_TEXT_COLOR));
        }

        if let Some(success) = self.board.success_message() {
            content =
                content.push(self.render_status_line(success, app_theme::SUCCESS_TEXT_COLOR));
        }

        content = if self.board.is_loading() {
            content.push(self.render_loading_indicator())
        } else {
            content.push(self.result_grid.render_ui())
        };

        let theme_mode = self.settings.theme_mode.clone();
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| app_theme::backdrop_style(&theme_mode))
            .into()
    }

    fn render_status_line<'a>(
        &self,
        message: &'a str,
        color: Color,
    ) -> Element<'a, OrchestratorMessage> {
        container(
            text(message)
                .size(15)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(color),
                }),
        )
        .padding(iced::Padding { top: 0.0, right: 0.0, bottom: 16.0, left: 0.0 })
        .center_x(Length::Fill)
        .into()
    }

    fn render_loading_indicator(&self) -> Element<'_, OrchestratorMessage> {
        let frame = global_constants::SPINNER_FRAMES[self.spinner_frame];

        container(
            row![text(frame).size(18), text("Loading...").size(16)]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .style(|_theme| iced::widget::container::Style {
            text_color: Some(Color::from_rgb(0.867, 0.839, 0.996)),
            ..Default::default()
        })
        .center_x(Length::Fill)
        .into()
    }
}
