use iced::widget::{column, container, image, scrollable, text, text_editor};
use iced::{event, task, time, window, Event, Size, Subscription};
use iced::{Element, Length, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod media;
mod state;
mod ui;

use error::Error;
use state::{Phase, ReportField, SelectedFile, Session, Settings, ThemeChoice, Ticket};
use ui::editors::ReportEditors;
use ui::spinner::Spinner;

const APP_TITLE: &str = "Radiology Report Assistant";

/// Frame interval of the processing spinner
const SPINNER_FRAME: Duration = Duration::from_millis(16);

/// Main application state
struct RadiologyReport {
    /// The upload → processing → report workflow
    session: Session,
    settings: Settings,
    /// Editor state mirroring the session's report draft
    editors: ReportEditors,
    /// Decoded preview of the selected image
    preview: Option<image::Handle>,
    /// Abort handle of the running analysis delay
    analysis: Option<task::Handle>,
    /// Picked or dropped files waiting to be read, oldest first
    pending_files: VecDeque<PathBuf>,
    /// A file read is in flight
    loading: bool,
    /// Files are hovering over the window
    drop_hover: bool,
    spinner: Spinner,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the drop area or "Change Image"
    BrowseImage,
    FileHovered,
    FileHoverLeft,
    FileDropped(PathBuf),
    /// Background file read completed
    ImageLoaded(Result<SelectedFile, Error>),
    Generate,
    /// The simulated analysis delay elapsed
    AnalysisElapsed(Ticket),
    Edit(ReportField, text_editor::Action),
    Save,
    Download,
    /// Clear, Cancel and "Analyze New Image" all start over
    Reset,
    SpinnerTick,
}

impl RadiologyReport {
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        info!(
            "🩻 {} ready (analysis delay {} ms)",
            APP_TITLE, settings.processing_delay_ms
        );

        (Self::with_settings(settings), Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        let session = Session::new();

        RadiologyReport {
            editors: ReportEditors::from_draft(session.report_draft()),
            session,
            settings,
            preview: None,
            analysis: None,
            pending_files: VecDeque::new(),
            loading: false,
            drop_hover: false,
            spinner: Spinner::default(),
            status: stamp("Ready. Select an image to begin."),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseImage => {
                if !self.session.accepts_images() {
                    return Task::none();
                }

                let file = FileDialog::new()
                    .set_title("Select Medical Image")
                    .add_filter("Images", media::loader::IMAGE_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => self.load_image(path),
                    None => Task::none(),
                }
            }
            Message::FileHovered => {
                self.drop_hover = self.session.accepts_images();
                Task::none()
            }
            Message::FileHoverLeft => {
                self.drop_hover = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drop_hover = false;

                if !self.session.accepts_images() {
                    debug!("Ignoring drop of {} while {:?}", path.display(), self.session.phase());
                    return Task::none();
                }

                self.load_image(path)
            }
            Message::ImageLoaded(Ok(file)) => {
                match self.session.select_image(file) {
                    Ok(true) => {
                        self.preview = self
                            .session
                            .selected_image()
                            .and_then(|selected| selected.preview_bytes())
                            .map(image::Handle::from_bytes);

                        if let Some(selected) = self.session.selected_image() {
                            self.status = stamp(format!("Image selected: {}", selected.filename));
                        }
                    }
                    Ok(false) => {}
                    Err(err) => self.reject(err),
                }

                self.load_next()
            }
            Message::ImageLoaded(Err(err)) => {
                self.reject(err);
                self.load_next()
            }
            Message::Generate => {
                let Some(ticket) = self.session.generate() else {
                    return Task::none();
                };

                self.spinner = Spinner::default();
                self.status = stamp("Analyzing image...");

                let (task, handle) = Task::perform(
                    media::analysis::simulate_analysis(ticket, self.settings.processing_delay()),
                    Message::AnalysisElapsed,
                )
                .abortable();
                self.analysis = Some(handle);

                task
            }
            Message::AnalysisElapsed(ticket) => {
                if self.session.finish_analysis(ticket) {
                    self.analysis = None;
                    self.editors = ReportEditors::from_draft(self.session.report_draft());
                    self.status = stamp("Analysis complete. Report is ready for review.");
                }

                Task::none()
            }
            Message::Edit(field, action) => {
                if let Some(value) = self.editors.perform(field, action) {
                    self.session.edit_field(field, value);
                }

                Task::none()
            }
            Message::Save => {
                if let Some(notice) = self.session.save() {
                    match self.session.report_draft().to_json() {
                        Ok(payload) => debug!(%payload, "Report save requested"),
                        Err(err) => warn!("Could not serialize report: {err}"),
                    }

                    self.status = stamp(notice.message());
                    alert(MessageLevel::Info, notice.message());
                }

                Task::none()
            }
            Message::Download => {
                if let Some(notice) = self.session.download() {
                    info!("Report download requested");
                    self.status = stamp(notice.message());
                    alert(MessageLevel::Info, notice.message());
                }

                Task::none()
            }
            Message::Reset => {
                if let Some(handle) = self.analysis.take() {
                    handle.abort();
                }

                self.pending_files.clear();
                self.session.reset();
                self.editors = ReportEditors::from_draft(self.session.report_draft());
                self.preview = None;
                self.drop_hover = false;
                self.status = stamp("Ready. Select an image to begin.");

                info!("🔄 Session reset");
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner.advance();
                Task::none()
            }
        }
    }

    /// Queue `path` for reading. Files are read one at a time in the order
    /// they arrived, so the last file dropped is the last one selected.
    fn load_image(&mut self, path: PathBuf) -> Task<Message> {
        self.pending_files.push_back(path);

        if self.loading {
            return Task::none();
        }

        self.load_next()
    }

    fn load_next(&mut self) -> Task<Message> {
        let Some(path) = self.pending_files.pop_front() else {
            self.loading = false;
            return Task::none();
        };

        self.loading = true;
        self.status = stamp(format!("Loading {}...", path.display()));

        Task::perform(
            media::loader::load_selected_file(path),
            Message::ImageLoaded,
        )
    }

    /// Report a rejected selection; the session is left as it was
    fn reject(&mut self, err: Error) {
        warn!("{err}");
        self.status = stamp(&err);
        alert(MessageLevel::Warning, &err.to_string());
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let preview = self.preview.as_ref();

        let body = match self.session.phase() {
            Phase::Uploading => ui::upload::view(&self.session, preview, self.drop_hover),
            Phase::Processing => ui::processing::view(preview, self.spinner),
            Phase::ReportReady => ui::report::view(preview, &self.editors),
        };

        let content = column![
            text(APP_TITLE).size(32),
            scrollable(body).height(Length::Fill),
            text(&self.status).size(14),
        ]
        .spacing(24)
        .padding(32);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let files = event::listen_with(window_file_event);

        if self.session.phase() == Phase::Processing {
            Subscription::batch([
                files,
                time::every(SPINNER_FRAME).map(|_| Message::SpinnerTick),
            ])
        } else {
            files
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

fn window_file_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

/// Prefix a status message with the local time
fn stamp(message: impl std::fmt::Display) -> String {
    format!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), message)
}

/// Blocking native dialog, the desktop counterpart of a browser alert
fn alert(level: MessageLevel, description: &str) {
    MessageDialog::new()
        .set_title(APP_TITLE)
        .set_description(description)
        .set_level(level)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(APP_TITLE, RadiologyReport::update, RadiologyReport::view)
        .theme(RadiologyReport::theme)
        .subscription(RadiologyReport::subscription)
        .window_size(Size::new(1100.0, 780.0))
        .centered()
        .run_with(RadiologyReport::new)
}
