//! Shared types for the correspondence assistant

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of correspondence to generate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    AppealResponse,
    ExemptionNotice,
    ValuationExplanation,
    GeneralInquiryResponse,
}

impl DocumentType {
    /// All document types in menu order
    pub const ALL: [DocumentType; 4] = [
        DocumentType::AppealResponse,
        DocumentType::ExemptionNotice,
        DocumentType::ValuationExplanation,
        DocumentType::GeneralInquiryResponse,
    ];

    /// Human-readable label, interpolated into the prompt
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::AppealResponse => "Appeal Response Letter",
            DocumentType::ExemptionNotice => "Exemption Notice",
            DocumentType::ValuationExplanation => "Valuation Explanation",
            DocumentType::GeneralInquiryResponse => "General Inquiry Response",
        }
    }

    /// What this kind of document is for
    pub fn purpose(&self) -> &'static str {
        match self {
            DocumentType::AppealResponse => {
                "Respond to a property owner's appeal of their property valuation."
            }
            DocumentType::ExemptionNotice => {
                "Notify a property owner of their exemption approval or denial."
            }
            DocumentType::ValuationExplanation => {
                "Explain the basis of a property's assessed value."
            }
            DocumentType::GeneralInquiryResponse => {
                "Respond to a resident's question or complaint."
            }
        }
    }

    /// Stable identifier for command line use
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentType::AppealResponse => "appeal-response",
            DocumentType::ExemptionNotice => "exemption-notice",
            DocumentType::ValuationExplanation => "valuation-explanation",
            DocumentType::GeneralInquiryResponse => "general-inquiry-response",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            DocumentType::AppealResponse => "AppealResponse",
            DocumentType::ExemptionNotice => "ExemptionNotice",
            DocumentType::ValuationExplanation => "ValuationExplanation",
            DocumentType::GeneralInquiryResponse => "GeneralInquiryResponse",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentType::ALL
            .iter()
            .copied()
            .find(|t| {
                [t.slug(), t.label(), t.variant_name()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ParseSelectionError::UnknownDocumentType {
                value: s.to_string(),
                accepted: DocumentType::ALL
                    .iter()
                    .map(|t| t.slug())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Stylistic register for generated text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ToneOption {
    Professional,
    Friendly,
    Formal,
}

impl ToneOption {
    pub const ALL: [ToneOption; 3] = [
        ToneOption::Professional,
        ToneOption::Friendly,
        ToneOption::Formal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToneOption::Professional => "Professional",
            ToneOption::Friendly => "Friendly",
            ToneOption::Formal => "Formal",
        }
    }
}

impl fmt::Display for ToneOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToneOption {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ToneOption::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSelectionError::UnknownTone {
                value: s.to_string(),
                accepted: ToneOption::ALL
                    .iter()
                    .map(|t| t.label().to_lowercase())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Rejected menu selection at the input boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSelectionError {
    #[error("Unknown document type '{value}' (expected one of: {accepted})")]
    UnknownDocumentType { value: String, accepted: String },

    #[error("Unknown tone '{value}' (expected one of: {accepted})")]
    UnknownTone { value: String, accepted: String },
}

/// Content was empty, so nothing was sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please enter some information to generate a response.")]
pub struct ValidationWarning;

/// One user submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    pub document_type: DocumentType,
    pub tone: ToneOption,
    pub user_content: String,
}

impl GenerationRequest {
    pub fn new(
        document_type: DocumentType,
        tone: ToneOption,
        user_content: impl Into<String>,
    ) -> Self {
        Self {
            document_type,
            tone,
            user_content: user_content.into(),
        }
    }

    /// Whitespace-only content counts as empty
    pub fn validate(&self) -> Result<(), ValidationWarning> {
        if self.user_content.trim().is_empty() {
            return Err(ValidationWarning);
        }
        Ok(())
    }
}

/// Outcome of a dispatched request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationResult {
    Generated { text: String },
    Failed { error_message: String },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Generated { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationResult::Generated { text } => Some(text),
            GenerationResult::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationResult::Generated { .. } => None,
            GenerationResult::Failed { error_message } => Some(error_message),
        }
    }
}
