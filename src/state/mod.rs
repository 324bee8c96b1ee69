/// State management module
///
/// This module handles all application state, including:
/// - The report data model (data.rs)
/// - The upload → processing → report workflow (session.rs)
/// - User settings (settings.rs)

pub mod data;
pub mod session;
pub mod settings;

pub use data::{Phase, ReportDraft, ReportField, SelectedFile};
pub use session::{Session, Ticket};
pub use settings::{Settings, ThemeChoice};
