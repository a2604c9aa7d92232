/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/
use std::collections::HashMap;

use log::*;

use crate::actions::{ActionId, ActionRegistry};
use crate::menu::{Collate, MenuKind, NetworkMenus};
use crate::network::{ConnectionState, NetworkDirectory, NetworkEvent, NetworkId};

/// One dynamically created action per known network, carrying the
/// back-reference to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAction {
    pub network: NetworkId,
    pub display_name: String,
}

/// Keeps the per-network actions and the two drop-down containers in
/// step with the network directory, and derives the enabled flags of the
/// aggregate actions from container population.
///
/// All mutation happens here, driven by directory events delivered on
/// the one control thread; the GUI only reads.
pub struct ToolbarActionProvider {
    actions: ActionRegistry,
    network_actions: HashMap<NetworkId, NetworkAction>,
    menus: NetworkMenus,
}

impl ToolbarActionProvider {
    pub fn new() -> Self {
        Self::build(NetworkMenus::new())
    }

    /// Same as [`new`](Self::new) with a pinned menu collator.
    pub fn with_collator(collate: Collate) -> Self {
        Self::build(NetworkMenus::with_collator(collate))
    }

    fn build(menus: NetworkMenus) -> Self {
        let mut actions = ActionRegistry::new();

        actions.register(
            ActionId::ConnectAll,
            "network-connect",
            "Connect",
            "Connect to IRC",
        );
        actions.register(
            ActionId::DisconnectAll,
            "network-disconnect",
            "Disconnect",
            "Disconnect from IRC",
        );
        actions.register(
            ActionId::JoinChannel,
            "irc-join-channel",
            "Join",
            "Join a channel",
        );
        actions.register(
            ActionId::PartChannel,
            "irc-close-channel",
            "Part",
            "Leave currently selected channel",
        );
        actions.register(
            ActionId::NickQuery,
            "mail-message-new",
            "Query",
            "Start a private conversation",
        );
        actions.register(
            ActionId::NickWhois,
            "im-user",
            "Whois",
            "Request user information",
        );
        actions.register(
            ActionId::NickOp,
            "irc-operator",
            "Op",
            "Give operator privileges to user",
        );
        actions.register(
            ActionId::NickDeop,
            "irc-remove-operator",
            "Deop",
            "Take operator privileges from user",
        );
        actions.register(
            ActionId::NickVoice,
            "irc-voice",
            "Voice",
            "Give voice to user",
        );
        actions.register(
            ActionId::NickDevoice,
            "irc-unvoice",
            "Devoice",
            "Take voice from user",
        );
        actions.register(
            ActionId::NickKick,
            "im-kick-user",
            "Kick",
            "Remove user from channel",
        );
        actions.register(
            ActionId::NickBan,
            "im-ban-user",
            "Ban",
            "Ban user from channel",
        );
        actions.register(
            ActionId::NickKickBan,
            "im-ban-kick-user",
            "Kick/Ban",
            "Remove and ban user from channel",
        );

        let mut provider = Self {
            actions,
            network_actions: HashMap::new(),
            menus,
        };
        // Both containers start empty.
        provider.recompute_enablement();
        provider
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    pub fn menus(&self) -> &NetworkMenus {
        &self.menus
    }

    pub fn action_for(&self, id: NetworkId) -> Option<&NetworkAction> {
        self.network_actions.get(&id)
    }

    pub fn network_action_count(&self) -> usize {
        self.network_actions.len()
    }

    pub fn handle_event(&mut self, dir: &NetworkDirectory, event: NetworkEvent) {
        match event {
            NetworkEvent::Created(id) => self.network_created(dir, id),
            NetworkEvent::Removed(id) => self.network_removed(id),
            NetworkEvent::Updated(id) => self.network_updated(dir, id),
        }
    }

    pub fn network_created(&mut self, dir: &NetworkDirectory, id: NetworkId) {
        if self.network_actions.contains_key(&id) {
            // Internal consistency error; keep the existing action.
            error!("Duplicate creation event for network {id}");
            return;
        }
        let Some(net) = dir.network(id) else {
            // Already gone again; the removal event will be a no-op too.
            debug!("Creation event for unknown network {id}");
            return;
        };
        self.network_actions.insert(
            id,
            NetworkAction {
                network: id,
                display_name: net.name.clone(),
            },
        );
        // Full sync before returning, so any queued update for this
        // network starts from a consistent placement.
        self.network_updated(dir, id);
    }

    pub fn network_removed(&mut self, id: NetworkId) {
        // The directory is authoritative and may report ids this side
        // never learned about.
        self.network_actions.remove(&id);
        self.menus.remove(id);
        self.recompute_enablement();
    }

    pub fn network_updated(&mut self, dir: &NetworkDirectory, id: NetworkId) {
        let Some(action) = self.network_actions.get_mut(&id) else {
            // Spurious update; nothing to place.
            return;
        };
        let Some(net) = dir.network(id) else {
            return;
        };

        action.display_name = net.name.clone();

        let target = if net.state == ConnectionState::Disconnected {
            MenuKind::Connect
        } else {
            MenuKind::Disconnect
        };
        // One relocation call covers container moves and renames alike.
        self.menus.insert_sorted(target, id, &net.name);

        self.recompute_enablement();
    }

    /// Dispatch for a per-network menu entry: connect when disconnected,
    /// disconnect otherwise. Pure fire-and-forget; placement changes
    /// arrive later as ordinary update events. Silent no-op when the
    /// network was removed between click and dispatch.
    pub fn connect_or_disconnect(&self, dir: &mut NetworkDirectory, id: NetworkId) {
        let Some(net) = dir.network(id) else {
            return;
        };
        if net.state == ConnectionState::Disconnected {
            dir.request_connect(id);
        } else {
            dir.request_disconnect(id);
        }
    }

    /// Bulk trigger over the connect container's data entries.
    pub fn connect_all(&self, dir: &mut NetworkDirectory) {
        let ids: Vec<NetworkId> = self
            .menus
            .menu(MenuKind::Connect)
            .data()
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            dir.request_connect(id);
        }
    }

    /// Bulk trigger over the disconnect container's data entries.
    pub fn disconnect_all(&self, dir: &mut NetworkDirectory) {
        let ids: Vec<NetworkId> = self
            .menus
            .menu(MenuKind::Disconnect)
            .data()
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            dir.request_disconnect(id);
        }
    }

    fn recompute_enablement(&mut self) {
        let any_connected = self.menus.data_count(MenuKind::Disconnect) > 0;
        let any_disconnected = self.menus.data_count(MenuKind::Connect) > 0;
        self.actions.set_enabled(ActionId::ConnectAll, any_connected);
        self.actions.set_enabled(ActionId::JoinChannel, any_connected);
        self.actions
            .set_enabled(ActionId::DisconnectAll, any_disconnected);
    }
}

impl Default for ToolbarActionProvider {
    fn default() -> Self {
        Self::new()
    }
}
