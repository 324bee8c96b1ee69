/// Shared data structures for the report session
///
/// These structs represent the data model that flows between
/// the session state machine and the UI layer.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Workflow stage of a session; decides which view is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Uploading,
    Processing,
    ReportReady,
}

/// A file chosen by the user, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Filename only (e.g., "chest.png")
    pub name: String,
    /// Media type guessed from the extension (e.g., "image/png")
    pub media_type: String,
    /// File contents; empty for files that were never read
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// In-memory reference to the selected image and its preview encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub filename: String,
    pub media_type: String,
    /// `data:<media type>;base64,<payload>` URL of the file contents
    pub preview_data: String,
}

impl ImageRef {
    pub fn from_file(file: SelectedFile) -> Self {
        let preview_data = format!(
            "data:{};base64,{}",
            file.media_type,
            STANDARD.encode(&file.bytes)
        );

        Self {
            filename: file.name,
            media_type: file.media_type,
            preview_data,
        }
    }

    /// Decode the preview back to raw bytes for display
    pub fn preview_bytes(&self) -> Option<Vec<u8>> {
        let (_, payload) = self.preview_data.split_once(";base64,")?;
        STANDARD.decode(payload).ok()
    }
}

/// One of the three editable sections of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    Findings,
    Impression,
    Recommendations,
}

impl ReportField {
    pub const ALL: [ReportField; 3] = [
        ReportField::Findings,
        ReportField::Impression,
        ReportField::Recommendations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportField::Findings => "Findings",
            ReportField::Impression => "Impression",
            ReportField::Recommendations => "Recommendations",
        }
    }
}

const TEMPLATE_FINDINGS: &str = "1. There is a 2.3 cm nodular opacity in the right upper lobe with spiculated margins.
2. Mild mediastinal lymphadenopathy noted, largest node measuring 1.5 cm in short axis.
3. No pleural effusion or pneumothorax.
4. Cardiac silhouette is normal in size.
5. Osseous structures are unremarkable.";

const TEMPLATE_IMPRESSION: &str = "Suspicious pulmonary nodule in the right upper lobe, concerning for primary lung malignancy. Recommend CT chest with contrast for further characterization.";

const TEMPLATE_RECOMMENDATIONS: &str = "1. CT chest with contrast for further evaluation of the right upper lobe nodule.
2. Consider PET-CT for staging if malignancy is confirmed.
3. Tissue diagnosis via CT-guided biopsy or bronchoscopy.
4. Follow-up in 1-2 weeks with results of further imaging.";

/// The editable report shown once analysis completes
///
/// Seeded from a fixed sample report. The sample is a UI fixture,
/// not a medical claim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub findings: String,
    pub impression: String,
    pub recommendations: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self::template()
    }
}

impl ReportDraft {
    /// The fixed sample report
    pub fn template() -> Self {
        Self {
            findings: TEMPLATE_FINDINGS.to_string(),
            impression: TEMPLATE_IMPRESSION.to_string(),
            recommendations: TEMPLATE_RECOMMENDATIONS.to_string(),
        }
    }

    #[cfg(test)]
    pub fn get(&self, field: ReportField) -> &str {
        match field {
            ReportField::Findings => &self.findings,
            ReportField::Impression => &self.impression,
            ReportField::Recommendations => &self.recommendations,
        }
    }

    pub fn set(&mut self, field: ReportField, value: String) {
        match field {
            ReportField::Findings => self.findings = value,
            ReportField::Impression => self.impression = value,
            ReportField::Recommendations => self.recommendations = value,
        }
    }

    /// Convert to the JSON payload a save would send
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[cfg(test)]
    pub fn is_template(&self) -> bool {
        *self == Self::template()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str, bytes: &[u8]) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            media_type: "image/png".to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_is_image_checks_prefix() {
        assert!(png("chest.png", b"").is_image());

        let dicom = SelectedFile {
            name: "scan.dcm".to_string(),
            media_type: "application/dicom".to_string(),
            bytes: Vec::new(),
        };
        assert!(!dicom.is_image());

        // "image" must be the top-level type, not a substring
        let tricky = SelectedFile {
            name: "x.bin".to_string(),
            media_type: "application/x-image".to_string(),
            bytes: Vec::new(),
        };
        assert!(!tricky.is_image());
    }

    #[test]
    fn test_preview_is_data_url() {
        let image = ImageRef::from_file(png("chest.png", &[0x89, b'P', b'N', b'G']));

        assert_eq!(image.filename, "chest.png");
        assert_eq!(image.preview_data, "data:image/png;base64,iVBORw==");
        assert_eq!(image.preview_bytes(), Some(vec![0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_set_touches_one_field() {
        let mut draft = ReportDraft::template();
        draft.set(ReportField::Impression, "Normal study.".to_string());

        assert_eq!(draft.get(ReportField::Impression), "Normal study.");
        assert_eq!(draft.findings, TEMPLATE_FINDINGS);
        assert_eq!(draft.recommendations, TEMPLATE_RECOMMENDATIONS);
        assert!(!draft.is_template());
    }

    #[test]
    fn test_to_json_has_all_sections() {
        let json = ReportDraft::template().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in ["findings", "impression", "recommendations"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
