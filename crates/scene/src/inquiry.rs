//! Agent inquiry from inside the tour

use hunian_config::{PropertyLayout, TourConfig};
use hunian_ipc::InquiryRequest;
use inquiry::{InquiryDetails, InquiryError};
use measuring::MeasurementTool;

/// Collect listing, tour and visitor details into an inquiry
pub fn inquiry_details(
    request: &InquiryRequest,
    layout: &PropertyLayout,
    focused_room: Option<&str>,
    tool: &MeasurementTool,
) -> InquiryDetails {
    let viewed_room = focused_room
        .and_then(|id| layout.room(id))
        .map(|room| room.name.clone());

    let measurements = if request.include_measurements {
        tool.summary_lines()
    } else {
        Vec::new()
    };

    InquiryDetails {
        reference: layout.reference.clone(),
        location: layout.location.clone(),
        price: layout.price.clone(),
        visitor_name: request.visitor_name.clone(),
        preferred_date: request.preferred_date.clone(),
        viewed_room,
        measurements,
        note: request.note.clone(),
        ..InquiryDetails::new(layout.property_name.clone())
    }
}

/// Build the agent chat link and the message it carries
pub fn build_inquiry(
    request: &InquiryRequest,
    layout: &PropertyLayout,
    focused_room: Option<&str>,
    tool: &MeasurementTool,
    config: &TourConfig,
) -> Result<(String, String), InquiryError> {
    let details = inquiry_details(request, layout, focused_room, tool);
    let url = details.whatsapp_link(
        config.agent_whatsapp.as_deref(),
        &config.default_country_code,
    )?;
    Ok((url, details.message()))
}
