/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/
use std::collections::HashMap;
use std::fmt;

use log::*;

use crate::events::{SubscriptionId, Subscriptions};

/// Opaque handle for a known network. Assigned by the directory,
/// never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(u32);

impl NetworkId {
    #[cfg(test)]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Initializing,
    Connected,
    Disconnecting,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Initializing => "initializing",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnecting => "disconnecting",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub id: NetworkId,
    pub name: String,
    pub server: Option<String>,
    pub state: ConnectionState,
}

/// Change notifications emitted by the directory. Delivery is synchronous
/// and in emission order on the one control thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkEvent {
    Created(NetworkId),
    Removed(NetworkId),
    Updated(NetworkId),
}

/// Authoritative list of known networks.
///
/// Connect/disconnect requests are fire-and-forget: they only advance the
/// state to `Connecting`/`Disconnecting` and emit an update; whatever
/// establishes the session reports the settled state later through
/// `set_connection_state`.
#[derive(Default)]
pub struct NetworkDirectory {
    networks: HashMap<NetworkId, Network>,
    next_id: u32,
    events: Subscriptions<NetworkEvent>,
}

impl NetworkDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&NetworkEvent) + 'static,
    {
        self.events.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn network(&self, id: NetworkId) -> Option<&Network> {
        self.networks.get(&id)
    }

    pub fn networks(&self) -> impl Iterator<Item = &Network> {
        self.networks.values()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn add_network(&mut self, name: impl Into<String>, server: Option<String>) -> NetworkId {
        self.next_id += 1;
        let id = NetworkId(self.next_id);
        self.networks.insert(
            id,
            Network {
                id,
                name: name.into(),
                server,
                state: ConnectionState::Disconnected,
            },
        );
        self.events.notify(&NetworkEvent::Created(id));
        id
    }

    pub fn remove_network(&mut self, id: NetworkId) {
        if self.networks.remove(&id).is_some() {
            self.events.notify(&NetworkEvent::Removed(id));
        }
    }

    pub fn rename_network(&mut self, id: NetworkId, name: impl Into<String>) {
        let Some(net) = self.networks.get_mut(&id) else {
            return;
        };
        net.name = name.into();
        self.events.notify(&NetworkEvent::Updated(id));
    }

    /// Reports the settled state of a pending request. No-op for unknown
    /// ids (the network may have been removed while a request was in
    /// flight) and for no-op transitions.
    pub fn set_connection_state(&mut self, id: NetworkId, state: ConnectionState) {
        let Some(net) = self.networks.get_mut(&id) else {
            return;
        };
        if net.state == state {
            return;
        }
        net.state = state;
        self.events.notify(&NetworkEvent::Updated(id));
    }

    pub fn request_connect(&mut self, id: NetworkId) {
        let Some(net) = self.networks.get(&id) else {
            return;
        };
        if net.state != ConnectionState::Disconnected {
            debug!("Connect requested for {} while {}", net.name, net.state);
            return;
        }
        info!("Connecting to {}", net.name);
        self.set_connection_state(id, ConnectionState::Connecting);
    }

    pub fn request_disconnect(&mut self, id: NetworkId) {
        let Some(net) = self.networks.get(&id) else {
            return;
        };
        if net.state == ConnectionState::Disconnected {
            debug!("Disconnect requested for {} while disconnected", net.name);
            return;
        }
        info!("Disconnecting from {}", net.name);
        self.set_connection_state(id, ConnectionState::Disconnecting);
    }
}
