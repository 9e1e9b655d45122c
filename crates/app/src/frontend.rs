//! Frontend bridge plumbing
//!
//! Provides a `FrontendResource` holding whichever `FrontendBridge` the bridge
//! mode selects. Inbound messages are moved into the scene's
//! `InboundUiMessages` before `Update`; outbound messages are flushed after it.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use hunian_frontend_core::{BridgeLifecycle, DetachedBridge, FrontendBridge};
use hunian_frontend_stdio::StdioBridge;
use hunian_ipc::{UiToViewer, ViewerToUi};
use hunian_scene::{InboundUiMessages, OutboundUiMessages};

use crate::config::{BridgeMode, HunianConfig};

/// The active bridge. NonSend because stdio writers are not required to be Sync.
pub struct FrontendResource {
    pub bridge: Box<dyn FrontendBridge>,
    /// Quit when the host UI goes away
    pub exit_on_disconnect: bool,
    exit_requested: bool,
}

impl FrontendResource {
    pub fn new(bridge: Box<dyn FrontendBridge>, exit_on_disconnect: bool) -> Self {
        Self {
            bridge,
            exit_on_disconnect,
            exit_requested: false,
        }
    }

    /// Create the bridge for a mode
    pub fn for_mode(mode: BridgeMode) -> Self {
        match mode {
            BridgeMode::Detached => Self::new(Box::new(DetachedBridge), false),
            BridgeMode::Stdio => Self::new(Box::new(StdioBridge::spawn()), true),
        }
    }

    /// Drain everything the UI has sent so far
    pub fn receive_all(&mut self) -> Vec<UiToViewer> {
        let mut msgs = Vec::new();
        while let Some(msg) = self.bridge.try_recv_from_ui() {
            msgs.push(msg);
        }
        msgs
    }

    /// Whether the app should exit now. True at most once.
    fn take_exit_request(&mut self) -> bool {
        if !self.exit_on_disconnect || self.exit_requested {
            return false;
        }
        if self.bridge.lifecycle() == BridgeLifecycle::Disconnected {
            self.exit_requested = true;
            return true;
        }
        false
    }
}

/// Move UI messages into the scene's inbound queue
fn receive_ui_messages(world: &mut World) {
    let (messages, exit) = {
        let Some(mut frontend) = world.get_non_send_resource_mut::<FrontendResource>() else {
            return;
        };
        (frontend.receive_all(), frontend.take_exit_request())
    };

    if !messages.is_empty() {
        if let Some(mut inbound) = world.get_resource_mut::<InboundUiMessages>() {
            debug!("Received {} message(s) from UI", messages.len());
            inbound.messages.extend(messages);
        }
    }

    if exit {
        info!("Host UI disconnected, exiting");
        if let Some(mut exit_messages) = world.get_resource_mut::<Messages<AppExit>>() {
            exit_messages.write(AppExit::Success);
        }
    }
}

/// Flush queued scene messages to the UI
fn send_ui_messages(world: &mut World) {
    let outbound_msgs = {
        let Some(mut outbound) = world.get_resource_mut::<OutboundUiMessages>() else {
            return;
        };
        outbound.drain()
    };

    if outbound_msgs.is_empty() {
        return;
    }

    let Some(mut frontend) = world.get_non_send_resource_mut::<FrontendResource>() else {
        return;
    };
    for msg in outbound_msgs {
        debug!("To UI via {}: {:?}", frontend.bridge.name(), msg);
        if let ViewerToUi::InquiryLink { url, .. } = &msg {
            // Without a host UI this is the only place the link shows up
            info!("Inquiry link: {}", url);
        }
        if let Err(e) = frontend.bridge.send_to_ui(&msg) {
            warn!("Failed to send message to UI via {}: {}", frontend.bridge.name(), e);
        }
    }
}

pub struct FrontendPlugin;

impl Plugin for FrontendPlugin {
    fn build(&self, app: &mut App) {
        let mode = app
            .world()
            .get_resource::<HunianConfig>()
            .map(|config| config.bridge_mode)
            .unwrap_or_default();

        let frontend = FrontendResource::for_mode(mode);
        info!("Frontend bridge: {}", frontend.bridge.name());

        app.insert_non_send_resource(frontend)
            .add_systems(PreUpdate, receive_ui_messages)
            .add_systems(PostUpdate, send_ui_messages);
    }
}
