use tracing::{debug, info, warn};

use super::data::{ImageRef, Phase, ReportDraft, ReportField, SelectedFile};
use crate::error::{Error, Result};

/// Identity of one scheduled analysis delay.
///
/// Only the ticket a session issued last is honoured, and `reset` forgets it,
/// so a delay that fires late cannot move a session it no longer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Confirmation surfaced to the user by the stub actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    DownloadStarted,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Report saved successfully!",
            Notice::DownloadStarted => "PDF download would be initiated here",
        }
    }
}

/// The upload → processing → report workflow of one window.
///
/// `selected_image` is always present in `Processing` and `ReportReady`;
/// `Uploading` without an image is the fresh state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    phase: Phase,
    selected_image: Option<ImageRef>,
    report_draft: ReportDraft,
    pending: Option<Ticket>,
    issued: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_image(&self) -> Option<&ImageRef> {
        self.selected_image.as_ref()
    }

    pub fn report_draft(&self) -> &ReportDraft {
        &self.report_draft
    }

    #[cfg(test)]
    pub fn is_fresh(&self) -> bool {
        self.phase == Phase::Uploading && self.selected_image.is_none()
    }

    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending
    }

    /// Whether the current view offers image selection
    pub fn accepts_images(&self) -> bool {
        self.phase == Phase::Uploading
    }

    pub fn can_generate(&self) -> bool {
        self.phase == Phase::Uploading && self.selected_image.is_some()
    }

    /// Store `file` as the selected image, replacing any previous one.
    ///
    /// Returns `Ok(false)` when the session is not in `Uploading`.
    pub fn select_image(&mut self, file: SelectedFile) -> Result<bool> {
        if !self.accepts_images() {
            debug!("Ignoring {} while {:?}", file.name, self.phase);
            return Ok(false);
        }

        if !file.is_image() {
            warn!("Rejected {} ({})", file.name, file.media_type);
            return Err(Error::InvalidFileType {
                filename: file.name,
                media_type: file.media_type,
            });
        }

        info!("🖼️  Selected {} ({}, {} bytes)", file.name, file.media_type, file.bytes.len());
        self.selected_image = Some(ImageRef::from_file(file));
        Ok(true)
    }

    /// Enter `Processing` and hand out the ticket of the delay to schedule
    pub fn generate(&mut self) -> Option<Ticket> {
        if !self.can_generate() {
            debug!("Generate ignored while {:?}", self.phase);
            return None;
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        self.phase = Phase::Processing;

        info!("⏳ Analysis started ({:?})", ticket);
        Some(ticket)
    }

    /// Complete the analysis scheduled under `ticket`.
    ///
    /// Returns false for stale tickets, leaving the session untouched.
    pub fn finish_analysis(&mut self, ticket: Ticket) -> bool {
        if self.phase != Phase::Processing || self.pending != Some(ticket) {
            debug!("Discarding stale analysis {:?}", ticket);
            return false;
        }

        self.pending = None;
        self.report_draft = ReportDraft::template();
        self.phase = Phase::ReportReady;

        info!("✅ Report ready");
        true
    }

    pub fn edit_field(&mut self, field: ReportField, value: String) -> bool {
        if self.phase != Phase::ReportReady {
            return false;
        }

        self.report_draft.set(field, value);
        true
    }

    pub fn save(&self) -> Option<Notice> {
        (self.phase == Phase::ReportReady).then_some(Notice::Saved)
    }

    pub fn download(&self) -> Option<Notice> {
        (self.phase == Phase::ReportReady).then_some(Notice::DownloadStarted)
    }

    /// Return to a fresh `Uploading` session from any phase
    pub fn reset(&mut self) {
        if let Some(ticket) = self.pending.take() {
            debug!("Cancelled pending analysis {:?}", ticket);
        }

        self.selected_image = None;
        self.report_draft = ReportDraft::template();
        self.phase = Phase::Uploading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, media_type: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            media_type: media_type.to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    fn processing() -> (Session, Ticket) {
        let mut session = Session::new();
        session.select_image(file("chest.png", "image/png")).unwrap();
        let ticket = session.generate().unwrap();
        (session, ticket)
    }

    fn report_ready() -> Session {
        let (mut session, ticket) = processing();
        assert!(session.finish_analysis(ticket));
        session
    }

    fn assert_fresh(session: &Session) {
        assert_eq!(session.phase(), Phase::Uploading);
        assert!(session.selected_image().is_none());
        assert!(session.report_draft().is_template());
        assert!(session.is_fresh());
    }

    #[test]
    fn test_new_session_is_fresh() {
        assert_fresh(&Session::new());
    }

    #[test]
    fn test_rejects_non_images() {
        for (name, media_type) in [
            ("notes.txt", "text/plain"),
            ("scan.dcm", "application/dicom"),
            ("blob", "application/octet-stream"),
            ("report.pdf", "application/pdf"),
        ] {
            let mut session = Session::new();
            let before = session.clone();

            let result = session.select_image(file(name, media_type));

            assert!(matches!(result, Err(Error::InvalidFileType { .. })));
            assert_eq!(session, before);
        }
    }

    #[test]
    fn test_rejection_keeps_previous_image() {
        let mut session = Session::new();
        session.select_image(file("chest.png", "image/png")).unwrap();

        let result = session.select_image(file("notes.txt", "text/plain"));

        assert!(result.is_err());
        assert_eq!(session.selected_image().unwrap().filename, "chest.png");
        assert!(session.can_generate());
    }

    #[test]
    fn test_accepts_images() {
        for (name, media_type) in [
            ("chest.png", "image/png"),
            ("knee.jpg", "image/jpeg"),
            ("hand.webp", "image/webp"),
        ] {
            let mut session = Session::new();

            assert_eq!(session.select_image(file(name, media_type)), Ok(true));
            assert_eq!(session.selected_image().unwrap().filename, name);
            assert_eq!(session.phase(), Phase::Uploading);
        }
    }

    #[test]
    fn test_reselection_replaces_image() {
        let mut session = Session::new();
        session.select_image(file("chest.png", "image/png")).unwrap();
        session.select_image(file("knee.jpg", "image/jpeg")).unwrap();

        let image = session.selected_image().unwrap();
        assert_eq!(image.filename, "knee.jpg");
        assert!(image.preview_data.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_selection_ignored_outside_uploading() {
        let (mut session, _) = processing();
        let before = session.clone();

        assert_eq!(session.select_image(file("knee.jpg", "image/jpeg")), Ok(false));
        assert_eq!(session, before);
    }

    #[test]
    fn test_generate_requires_image() {
        let mut session = Session::new();

        assert!(session.generate().is_none());
        assert_fresh(&session);
    }

    #[test]
    fn test_generate_enters_processing() {
        let (session, _) = processing();

        assert_eq!(session.phase(), Phase::Processing);
        assert!(session.selected_image().is_some());
        assert!(!session.can_generate());
    }

    #[test]
    fn test_generate_twice_is_noop() {
        let (mut session, _) = processing();
        let before = session.clone();

        assert!(session.generate().is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_finish_loads_template() {
        let session = report_ready();

        assert_eq!(session.phase(), Phase::ReportReady);
        assert_eq!(session.report_draft(), &ReportDraft::template());
        assert_eq!(session.selected_image().unwrap().filename, "chest.png");
    }

    #[test]
    fn test_finish_twice_is_stale() {
        let (mut session, ticket) = processing();
        assert!(session.finish_analysis(ticket));

        session.edit_field(ReportField::Findings, "edited".to_string());
        assert!(!session.finish_analysis(ticket));
        assert_eq!(session.report_draft().findings, "edited");
    }

    #[test]
    fn test_ticket_from_before_reset_is_stale() {
        let (mut session, old) = processing();
        session.reset();

        // A new run must not be completed by the old timer
        session.select_image(file("knee.jpg", "image/jpeg")).unwrap();
        let current = session.generate().unwrap();

        assert_ne!(old, current);
        assert!(!session.finish_analysis(old));
        assert_eq!(session.phase(), Phase::Processing);
        assert!(session.finish_analysis(current));
    }

    #[test]
    fn test_stale_ticket_after_reset_keeps_fresh_state() {
        let (mut session, ticket) = processing();
        session.reset();

        assert!(!session.finish_analysis(ticket));
        assert_fresh(&session);
    }

    #[test]
    fn test_edit_field_updates_only_that_field() {
        let mut session = report_ready();

        assert!(session.edit_field(ReportField::Findings, "No acute findings.".to_string()));

        let draft = session.report_draft();
        let template = ReportDraft::template();
        assert_eq!(draft.findings, "No acute findings.");
        assert_eq!(draft.impression, template.impression);
        assert_eq!(draft.recommendations, template.recommendations);
        assert_eq!(session.phase(), Phase::ReportReady);
    }

    #[test]
    fn test_edit_field_outside_report_is_noop() {
        let mut session = Session::new();

        assert!(!session.edit_field(ReportField::Impression, "x".to_string()));
        assert!(session.report_draft().is_template());
    }

    #[test]
    fn test_save_and_download_only_when_ready() {
        let (session, _) = processing();
        assert_eq!(session.save(), None);
        assert_eq!(session.download(), None);

        let session = report_ready();
        assert_eq!(session.save(), Some(Notice::Saved));
        assert_eq!(session.download(), Some(Notice::DownloadStarted));
        assert_eq!(session.phase(), Phase::ReportReady);
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut uploading = Session::new();
        uploading.select_image(file("chest.png", "image/png")).unwrap();

        let (processing, _) = processing();

        let mut ready = report_ready();
        ready.edit_field(ReportField::Recommendations, "None.".to_string());

        for mut session in [Session::new(), uploading, processing, ready] {
            session.reset();
            assert_fresh(&session);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = report_ready();
        once.edit_field(ReportField::Findings, "edited".to_string());
        let mut twice = once.clone();

        once.reset();
        twice.reset();
        twice.reset();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::Saved.message(), "Report saved successfully!");
        assert_eq!(
            Notice::DownloadStarted.message(),
            "PDF download would be initiated here"
        );
    }
}
