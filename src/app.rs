use std::path::PathBuf;

use iced::Task;
use tracing::debug;

use crate::api::{ApiClient, ApiConfig};
use crate::application::{StatusDisplay, UploadCoordinator};
use crate::domain::SubmissionOutcome;
use crate::ui::{UploadMessage, UploadView};

pub struct UploadApp {
    view: UploadView,
    coordinator: UploadCoordinator,
}

impl UploadApp {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            view: UploadView::default(),
            coordinator: UploadCoordinator::new(ApiClient::new(config)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(UploadMessage),
    /// Result of the file dialog; `None` when cancelled
    FileSelected(Option<PathBuf>),
    /// One per submission, delivered in completion order
    SubmissionResolved(SubmissionOutcome),
}

pub fn update(app: &mut UploadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(UploadMessage::ChooseFilePressed) => {
            let coordinator = app.coordinator.clone();
            return Task::perform(
                async move { coordinator.choose_file().await },
                Message::FileSelected,
            );
        }
        Message::UiMessage(UploadMessage::SubmitPressed) => {
            let form = app.view.snapshot();
            app.coordinator.begin(&mut app.view.status);

            // No guard against a submission already in flight: each one
            // resolves on its own and the last to finish owns the status text.
            let coordinator = app.coordinator.clone();
            return Task::perform(
                async move { coordinator.submit(form).await },
                Message::SubmissionResolved,
            );
        }
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg);
        }
        Message::FileSelected(Some(path)) => {
            debug!(path = %path.display(), "file selected");
            app.view.file = Some(path);
        }
        Message::FileSelected(None) => {
            // Dialog cancelled, keep the previous selection
        }
        Message::SubmissionResolved(outcome) => {
            debug!(kind = ?outcome.kind, "submission resolved");
            app.view.status.apply(&outcome);
        }
    }
    Task::none()
}

pub fn view(app: &UploadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}
