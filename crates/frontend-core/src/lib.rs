//! Frontend core abstractions for Hunian
//!
//! Defines the `FrontendBridge` trait that abstracts over the ways a host UI
//! can exchange protocol messages with the viewer.

use hunian_ipc::{UiToViewer, ViewerToUi};

/// Lifecycle state of a bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeLifecycle {
    /// Bridge is connecting to the host
    Connecting,
    /// Bridge is ready for normal operation
    Ready,
    /// The host went away; no more messages will arrive
    Disconnected,
}

/// Errors that can occur in frontend operations
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// Failed to send message to UI
    #[error("Failed to send message to UI: {0}")]
    SendFailed(String),

    /// Failed to receive message from UI
    #[error("Failed to receive message from UI: {0}")]
    ReceiveFailed(String),

    /// Bridge is not ready
    #[error("Bridge is not ready")]
    NotReady,
}

/// Trait for transports between the viewer and a host UI
pub trait FrontendBridge {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Current lifecycle state
    fn lifecycle(&self) -> BridgeLifecycle;

    /// Check if the bridge can carry messages
    fn is_ready(&self) -> bool {
        self.lifecycle() == BridgeLifecycle::Ready
    }

    /// Send a message to the UI
    fn send_to_ui(&mut self, msg: &ViewerToUi) -> Result<(), FrontendError>;

    /// Try to receive a message from the UI (non-blocking)
    fn try_recv_from_ui(&mut self) -> Option<UiToViewer>;
}

/// Bridge used when the viewer runs without a host UI.
///
/// Outbound messages are dropped and nothing is ever received.
#[derive(Debug, Default)]
pub struct DetachedBridge;

impl FrontendBridge for DetachedBridge {
    fn name(&self) -> &'static str {
        "detached"
    }

    fn lifecycle(&self) -> BridgeLifecycle {
        BridgeLifecycle::Ready
    }

    fn send_to_ui(&mut self, _msg: &ViewerToUi) -> Result<(), FrontendError> {
        Ok(())
    }

    fn try_recv_from_ui(&mut self) -> Option<UiToViewer> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_bridge_is_silent() {
        let mut bridge = DetachedBridge;
        assert!(bridge.is_ready());
        assert!(bridge.send_to_ui(&ViewerToUi::MeasurementsCleared).is_ok());
        assert!(bridge.try_recv_from_ui().is_none());
    }
}
