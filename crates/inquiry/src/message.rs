//! Human-readable inquiry text.

use serde::{Deserialize, Serialize};

use crate::error::InquiryError;
use crate::link::{normalize_phone, whatsapp_link};

/// Everything that goes into a visitor's inquiry message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryDetails {
    pub property_title: String,
    /// Listing reference code
    pub reference: Option<String>,
    pub location: Option<String>,
    /// Display price, already formatted by the listing
    pub price: Option<String>,
    pub visitor_name: Option<String>,
    pub preferred_date: Option<String>,
    /// Room the visitor was looking at in the 3D tour
    pub viewed_room: Option<String>,
    /// Formatted measurements taken during the tour
    pub measurements: Vec<String>,
    pub note: Option<String>,
}

impl InquiryDetails {
    pub fn new(property_title: impl Into<String>) -> Self {
        Self {
            property_title: property_title.into(),
            ..Default::default()
        }
    }

    /// Render the message text. Empty optional fields are left out.
    pub fn message(&self) -> String {
        let mut lines = Vec::new();

        match non_empty(&self.visitor_name) {
            Some(name) => lines.push(format!(
                "Hello, my name is {name}. I'm interested in {}.",
                self.property_title
            )),
            None => lines.push(format!("Hello, I'm interested in {}.", self.property_title)),
        }

        if let Some(reference) = non_empty(&self.reference) {
            lines.push(format!("Reference: {reference}"));
        }
        if let Some(location) = non_empty(&self.location) {
            lines.push(format!("Location: {location}"));
        }
        if let Some(price) = non_empty(&self.price) {
            lines.push(format!("Price: {price}"));
        }
        if let Some(room) = non_empty(&self.viewed_room) {
            lines.push(format!("Currently viewing: {room}"));
        }
        if let Some(date) = non_empty(&self.preferred_date) {
            lines.push(format!("Preferred viewing date: {date}"));
        }
        if !self.measurements.is_empty() {
            lines.push("Measurements from the virtual tour:".to_string());
            lines.extend(self.measurements.iter().map(|m| format!("- {m}")));
        }
        if let Some(note) = non_empty(&self.note) {
            lines.push(format!("Note: {note}"));
        }

        lines.join("\n")
    }

    /// Deep link that opens a chat with the agent, prefilled with [`Self::message`].
    pub fn whatsapp_link(
        &self,
        agent_phone: Option<&str>,
        default_country_code: &str,
    ) -> Result<String, InquiryError> {
        let agent_phone = agent_phone.ok_or(InquiryError::MissingAgentNumber)?;
        let phone = normalize_phone(agent_phone, default_country_code)?;
        whatsapp_link(&phone, &self.message())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
