//! COA submission payload: a PDF, pasted text, or both.

/// An in-memory PDF attachment.
#[derive(Debug, Clone)]
pub struct PdfAttachment {
  pub file_name: String,
  pub bytes:     Vec<u8>,
}

/// What the user handed us for analysis.
///
/// The backend accepts a `coa_pdf` file part and/or a `coa_text` text part;
/// an empty submission is rejected client-side before any request is made.
#[derive(Debug, Clone, Default)]
pub struct CoaSubmission {
  pub pdf:  Option<PdfAttachment>,
  pub text: Option<String>,
}

impl CoaSubmission {
  pub fn from_pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
    Self {
      pdf:  Some(PdfAttachment {
        file_name: file_name.into(),
        bytes,
      }),
      text: None,
    }
  }

  pub fn from_text(text: impl Into<String>) -> Self {
    Self {
      pdf:  None,
      text: Some(text.into()),
    }
  }

  /// True when there is nothing to send. Whitespace-only text counts as
  /// empty.
  pub fn is_empty(&self) -> bool {
    self.pdf.is_none()
      && self
        .text
        .as_deref()
        .map(|t| t.trim().is_empty())
        .unwrap_or(true)
  }
}
