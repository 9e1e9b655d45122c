//! WhatsApp lead capture for property tours
//!
//! Builds the human-readable inquiry text a visitor sends to the listing agent
//! and wraps it in a `wa.me` deep link. No API calls are made; the link is
//! opened by the host UI.

pub mod error;
pub mod link;
pub mod message;

pub use error::InquiryError;
pub use link::{WHATSAPP_BASE_URL, normalize_phone, whatsapp_link};
pub use message::InquiryDetails;
