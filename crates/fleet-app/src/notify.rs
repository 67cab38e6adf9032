//! Ship event notifications
//!
//! Only ship operations broadcast; truck operations are request/response
//! only. The broadcast excludes the originating connection so a client
//! does not get echoed its own action. From the workflow's perspective the
//! broadcast is fire-and-forget: it happens after commit and cannot fail
//! the operation, so the trait is infallible and transports deal with
//! delivery problems themselves.

use serde::Serialize;

use fleet_types::{ContainerId, ShipId};

/// The `{id, name}` container payload carried by every ship event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    pub id: ContainerId,
    pub name: String,
}

/// A change to some ship's cargo, broadcast to connected clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "PascalCase")]
pub enum ShipEvent {
    ShipLoaded {
        ship_id: ShipId,
        container: ContainerSummary,
    },
    ShipUnloaded {
        ship_id: ShipId,
        container: ContainerSummary,
    },
    ContainerTransferred {
        source_ship_id: ShipId,
        destination_ship_id: ShipId,
        container: ContainerSummary,
    },
}

/// Push channel towards connected clients.
pub trait ShipNotifier {
    /// Broadcast `event` to every connection except `connection_id`.
    fn broadcast_except(&self, connection_id: &str, event: &ShipEvent);
}

/// Notifier that drops every event. Used where no clients can listen.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl ShipNotifier for NullNotifier {
    fn broadcast_except(&self, _connection_id: &str, _event: &ShipEvent) {}
}

/// Notifier that emits events to the tracing subscriber. Stands in for a
/// real push transport in the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl ShipNotifier for LogNotifier {
    fn broadcast_except(&self, connection_id: &str, event: &ShipEvent) {
        tracing::info!(excluded = connection_id, ?event, "ship event");
    }
}
