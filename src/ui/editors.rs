/// Text editor state for the three report sections
///
/// iced's `text_editor` keeps cursor and selection in a `Content`, so the view
/// holds one per field and the session keeps the plain text. Edits flow
/// editor → session; whole-draft changes (analysis finished, reset) rebuild
/// the editors from the session.

use iced::widget::text_editor::{Action, Content};

use crate::state::{ReportDraft, ReportField};

pub struct ReportEditors {
    findings: Content,
    impression: Content,
    recommendations: Content,
}

impl ReportEditors {
    pub fn from_draft(draft: &ReportDraft) -> Self {
        Self {
            findings: Content::with_text(&draft.findings),
            impression: Content::with_text(&draft.impression),
            recommendations: Content::with_text(&draft.recommendations),
        }
    }

    pub fn get(&self, field: ReportField) -> &Content {
        match field {
            ReportField::Findings => &self.findings,
            ReportField::Impression => &self.impression,
            ReportField::Recommendations => &self.recommendations,
        }
    }

    fn get_mut(&mut self, field: ReportField) -> &mut Content {
        match field {
            ReportField::Findings => &mut self.findings,
            ReportField::Impression => &mut self.impression,
            ReportField::Recommendations => &mut self.recommendations,
        }
    }

    /// Apply an editor action; returns the new text when it changed
    pub fn perform(&mut self, field: ReportField, action: Action) -> Option<String> {
        let is_edit = action.is_edit();
        let content = self.get_mut(field);
        content.perform(action);

        is_edit.then(|| editor_text(content))
    }
}

/// Join the editor lines as typed; `Content::text` would append a final newline
fn editor_text(content: &Content) -> String {
    content
        .lines()
        .enumerate()
        .fold(String::new(), |mut text, (i, line)| {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&line);
            text
        })
}
