/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/
use std::collections::HashMap;

/// Stable identifiers for every user-triggerable action the toolbars
/// expose. The set is static; only the enabled flags change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    ConnectAll,
    DisconnectAll,
    JoinChannel,
    PartChannel,
    NickQuery,
    NickWhois,
    NickOp,
    NickDeop,
    NickVoice,
    NickDevoice,
    NickKick,
    NickBan,
    NickKickBan,
}

#[derive(Debug, Clone)]
pub struct Action {
    pub icon: &'static str,
    pub text: &'static str,
    pub tooltip: &'static str,
    pub enabled: bool,
}

/// Icon/text/tooltip registration with a queryable enabled flag.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<ActionId, Action>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: ActionId,
        icon: &'static str,
        text: &'static str,
        tooltip: &'static str,
    ) {
        self.actions.insert(
            id,
            Action {
                icon,
                text,
                tooltip,
                enabled: true,
            },
        );
    }

    pub fn action(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(&id)
    }

    pub fn is_enabled(&self, id: ActionId) -> bool {
        self.actions.get(&id).is_some_and(|a| a.enabled)
    }

    pub fn set_enabled(&mut self, id: ActionId, enabled: bool) {
        if let Some(action) = self.actions.get_mut(&id) {
            action.enabled = enabled;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarKind {
    Network,
    Nick,
}

/// Fixed toolbar compositions. The network bar carries the aggregate
/// connect/disconnect actions with their drop-down menus attached.
pub fn toolbar_actions(kind: ToolbarKind) -> &'static [ActionId] {
    match kind {
        ToolbarKind::Network => &[
            ActionId::ConnectAll,
            ActionId::DisconnectAll,
            ActionId::JoinChannel,
            ActionId::PartChannel,
        ],
        ToolbarKind::Nick => &[
            ActionId::NickQuery,
            ActionId::NickWhois,
            ActionId::NickOp,
            ActionId::NickDeop,
            ActionId::NickVoice,
            ActionId::NickDevoice,
            ActionId::NickKick,
            ActionId::NickBan,
            ActionId::NickKickBan,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_toggle() {
        let mut reg = ActionRegistry::new();
        reg.register(ActionId::JoinChannel, "irc-join-channel", "Join", "Join a channel");

        assert!(reg.is_enabled(ActionId::JoinChannel));
        reg.set_enabled(ActionId::JoinChannel, false);
        assert!(!reg.is_enabled(ActionId::JoinChannel));
        assert_eq!(reg.action(ActionId::JoinChannel).unwrap().text, "Join");
    }

    #[test]
    fn unregistered_action_is_disabled() {
        let reg = ActionRegistry::new();
        assert!(!reg.is_enabled(ActionId::NickKick));
        assert!(reg.action(ActionId::NickKick).is_none());
    }

    #[test]
    fn toolbar_compositions_are_disjoint() {
        let network = toolbar_actions(ToolbarKind::Network);
        let nick = toolbar_actions(ToolbarKind::Nick);
        assert!(network.iter().all(|a| !nick.contains(a)));
    }
}
