use std::path::PathBuf;

use iced::{
    widget::{button, column, row, text, text_editor, Space},
    Alignment, Element, Length,
};

use crate::{
    application::StatusDisplay,
    domain::{StatusPhase, SubmissionForm},
    utils::display_name,
};

/// Status region under the form: a busy line while pending, outcome text once resolved.
#[derive(Debug, Default)]
pub struct StatusView {
    pub phase: StatusPhase,
    pub text: String,
}

impl StatusView {
    pub fn is_busy(&self) -> bool {
        self.phase == StatusPhase::Pending
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        if self.is_busy() {
            return text("Sending messages...").size(14).into();
        }

        match self.phase {
            StatusPhase::Resolved => text(&self.text).size(14).into(),
            StatusPhase::Idle | StatusPhase::Pending => {
                Space::new().height(Length::Fixed(20.0)).into()
            }
        }
    }
}

impl StatusDisplay for StatusView {
    fn show_pending(&mut self) {
        self.phase = StatusPhase::Pending;
    }

    fn resolve(&mut self, text: &str) {
        self.phase = StatusPhase::Resolved;
        self.text = text.to_string();
    }
}

/// Main view state
pub struct UploadView {
    pub file: Option<PathBuf>,
    pub message: text_editor::Content,
    pub status: StatusView,
}

impl Default for UploadView {
    fn default() -> Self {
        Self {
            file: None,
            message: text_editor::Content::new(),
            status: StatusView::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UploadMessage {
    ChooseFilePressed,
    MessageEdited(text_editor::Action),
    SubmitPressed,
}

impl UploadView {
    pub fn update(&mut self, message: UploadMessage) {
        match message {
            UploadMessage::MessageEdited(action) => {
                self.message.perform(action);
            }
            UploadMessage::ChooseFilePressed | UploadMessage::SubmitPressed => {
                // Will be handled by the app
            }
        }
    }

    /// Current form state; the form itself is left as is.
    pub fn snapshot(&self) -> SubmissionForm {
        SubmissionForm {
            file: self.file.clone(),
            message: self.message.text(),
        }
    }

    pub fn view(&self) -> Element<'_, UploadMessage> {
        let file_label = self
            .file
            .as_deref()
            .map(display_name)
            .unwrap_or_else(|| "No file chosen".to_string());

        column![
            text("Bulk Message Sender").size(32),
            Space::new().height(Length::Fixed(20.0)),
            text("Contact list:").size(16),
            row![
                button("Choose file")
                    .on_press(UploadMessage::ChooseFilePressed)
                    .padding([10, 20]),
                text(file_label).size(14),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            Space::new().height(Length::Fixed(10.0)),
            text("Message:").size(16),
            text_editor(&self.message)
                .placeholder("Type your message...")
                .on_action(UploadMessage::MessageEdited)
                .height(Length::Fixed(150.0))
                .padding(10),
            Space::new().height(Length::Fixed(20.0)),
            button("Send messages")
                .on_press(UploadMessage::SubmitPressed)
                .padding([10, 20]),
            self.status.view(),
        ]
        .padding(20)
        .spacing(10)
        .into()
    }
}
