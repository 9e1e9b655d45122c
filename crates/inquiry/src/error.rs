//! Error types for inquiry link building.

/// Errors that can occur while building an inquiry link.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Inquiry message is empty")]
    EmptyMessage,

    #[error("No agent WhatsApp number configured")]
    MissingAgentNumber,
}
