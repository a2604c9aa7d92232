/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/
use std::cmp::Ordering;

use crate::actions::ActionId;
use crate::network::NetworkId;

/// String comparison used for menu ordering. Pluggable so the ordering
/// stays deterministic regardless of the process locale.
pub type Collate = fn(&str, &str) -> Ordering;

/// Default collation: compare the Unicode-lowercased forms so that
/// "mu" sorts before "Zeta" and ties between case variants are left to
/// insertion order.
pub fn caseless_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(|c| c.to_lowercase())
        .cmp(b.chars().flat_map(|c| c.to_lowercase()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Connect,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// One data entry per known network, labeled with its display name.
    Network { id: NetworkId, name: String },
    Separator,
    /// Trailing bulk trigger ("Connect to all" / "Disconnect from all").
    BulkAction { action: ActionId, label: &'static str },
}

/// Number of fixed trailing entries in every container.
const SENTINEL_COUNT: usize = 2;

/// Ordered container of per-network entries followed by a separator and
/// a bulk-action entry. The sentinels always occupy the last two
/// positions; only the data region in front of them is ever mutated.
#[derive(Debug)]
pub struct SortedMenu {
    entries: Vec<MenuEntry>,
}

impl SortedMenu {
    fn new(bulk_action: ActionId, bulk_label: &'static str) -> Self {
        Self {
            entries: vec![
                MenuEntry::Separator,
                MenuEntry::BulkAction {
                    action: bulk_action,
                    label: bulk_label,
                },
            ],
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    fn data_len(&self) -> usize {
        self.entries.len() - SENTINEL_COUNT
    }

    /// Iterates the data region only, skipping the trailing sentinels.
    pub fn data(&self) -> impl Iterator<Item = (NetworkId, &str)> {
        self.entries[..self.data_len()].iter().map(|e| match e {
            MenuEntry::Network { id, name } => (*id, name.as_str()),
            // Sentinels never appear in the data region.
            _ => unreachable!("sentinel inside menu data region"),
        })
    }

    fn remove(&mut self, id: NetworkId) -> bool {
        let len_before = self.entries.len();
        self.entries
            .retain(|e| !matches!(e, MenuEntry::Network { id: n, .. } if *n == id));
        self.entries.len() < len_before
    }

    fn insert(&mut self, id: NetworkId, name: &str, collate: Collate) {
        let mut pos = self.data_len();
        for (i, (_, existing)) in self.data().enumerate() {
            if collate(name, existing) == Ordering::Less {
                pos = i;
                break;
            }
        }
        self.entries.insert(
            pos,
            MenuEntry::Network {
                id,
                name: name.to_owned(),
            },
        );
    }
}

/// The "connect to network" / "disconnect from network" container pair.
pub struct NetworkMenus {
    connect: SortedMenu,
    disconnect: SortedMenu,
    collate: Collate,
}

impl NetworkMenus {
    pub fn new() -> Self {
        Self::with_collator(caseless_compare)
    }

    pub fn with_collator(collate: Collate) -> Self {
        Self {
            connect: SortedMenu::new(ActionId::ConnectAll, "Connect to all"),
            disconnect: SortedMenu::new(ActionId::DisconnectAll, "Disconnect from all"),
            collate,
        }
    }

    pub fn menu(&self, kind: MenuKind) -> &SortedMenu {
        match kind {
            MenuKind::Connect => &self.connect,
            MenuKind::Disconnect => &self.disconnect,
        }
    }

    fn menu_mut(&mut self, kind: MenuKind) -> &mut SortedMenu {
        match kind {
            MenuKind::Connect => &mut self.connect,
            MenuKind::Disconnect => &mut self.disconnect,
        }
    }

    /// Relocation primitive: removes the entry for `id` from whichever
    /// container currently holds it, then inserts it into `kind`'s data
    /// region before the first entry whose name compares greater.
    /// Equal-comparing names keep their existing relative order and the
    /// new entry lands after them.
    ///
    /// State changes and renames are both just this call.
    pub fn insert_sorted(&mut self, kind: MenuKind, id: NetworkId, name: &str) {
        self.remove(id);
        let collate = self.collate;
        self.menu_mut(kind).insert(id, name, collate);
    }

    /// Removes `id` from both containers; no-op when absent.
    pub fn remove(&mut self, id: NetworkId) {
        self.connect.remove(id);
        self.disconnect.remove(id);
    }

    /// Entry count excluding the two trailing sentinels.
    pub fn data_count(&self, kind: MenuKind) -> usize {
        self.menu(kind).data_len()
    }

    /// Which container currently holds `id`, if any.
    pub fn membership(&self, id: NetworkId) -> Option<MenuKind> {
        if self.connect.data().any(|(n, _)| n == id) {
            Some(MenuKind::Connect)
        } else if self.disconnect.data().any(|(n, _)| n == id) {
            Some(MenuKind::Disconnect)
        } else {
            None
        }
    }
}

impl Default for NetworkMenus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> NetworkId {
        NetworkId::from_raw(raw)
    }

    fn names(menus: &NetworkMenus, kind: MenuKind) -> Vec<String> {
        menus
            .menu(kind)
            .data()
            .map(|(_, name)| name.to_owned())
            .collect()
    }

    fn assert_sentinels_trail(menus: &NetworkMenus, kind: MenuKind) {
        let entries = menus.menu(kind).entries();
        let n = entries.len();
        assert!(n >= 2);
        assert_eq!(entries[n - 2], MenuEntry::Separator);
        assert!(matches!(entries[n - 1], MenuEntry::BulkAction { .. }));
        for e in &entries[..n - 2] {
            assert!(matches!(e, MenuEntry::Network { .. }));
        }
    }

    #[test]
    fn caseless_compare_ignores_case() {
        assert_eq!(caseless_compare("mu", "Zeta"), Ordering::Less);
        assert_eq!(caseless_compare("Zeta", "mu"), Ordering::Greater);
        assert_eq!(caseless_compare("MU", "mu"), Ordering::Equal);
    }

    #[test]
    fn empty_menus_hold_only_sentinels() {
        let menus = NetworkMenus::new();
        assert_eq!(menus.data_count(MenuKind::Connect), 0);
        assert_eq!(menus.data_count(MenuKind::Disconnect), 0);
        assert_sentinels_trail(&menus, MenuKind::Connect);
        assert_sentinels_trail(&menus, MenuKind::Disconnect);
    }

    #[test]
    fn insertions_keep_collated_order() {
        let mut menus = NetworkMenus::new();
        menus.insert_sorted(MenuKind::Connect, id(1), "Zeta");
        menus.insert_sorted(MenuKind::Connect, id(2), "alpha");
        menus.insert_sorted(MenuKind::Connect, id(3), "Mu");

        assert_eq!(names(&menus, MenuKind::Connect), vec!["alpha", "Mu", "Zeta"]);
        assert_sentinels_trail(&menus, MenuKind::Connect);
    }

    #[test]
    fn equal_names_append_after_existing() {
        let mut menus = NetworkMenus::new();
        menus.insert_sorted(MenuKind::Connect, id(1), "mu");
        menus.insert_sorted(MenuKind::Connect, id(2), "MU");
        menus.insert_sorted(MenuKind::Connect, id(3), "Mu");

        let order: Vec<NetworkId> = menus
            .menu(MenuKind::Connect)
            .data()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(order, vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn insert_sorted_relocates_across_containers() {
        let mut menus = NetworkMenus::new();
        menus.insert_sorted(MenuKind::Disconnect, id(1), "Alpha");
        assert_eq!(menus.membership(id(1)), Some(MenuKind::Disconnect));

        menus.insert_sorted(MenuKind::Connect, id(1), "Alpha");
        assert_eq!(menus.membership(id(1)), Some(MenuKind::Connect));
        assert_eq!(menus.data_count(MenuKind::Disconnect), 0);
        assert_eq!(menus.data_count(MenuKind::Connect), 1);
    }

    #[test]
    fn reinsert_into_same_container_does_not_duplicate() {
        let mut menus = NetworkMenus::new();
        menus.insert_sorted(MenuKind::Connect, id(1), "Alpha");
        menus.insert_sorted(MenuKind::Connect, id(1), "Alpha");
        assert_eq!(menus.data_count(MenuKind::Connect), 1);
    }

    #[test]
    fn rename_via_insert_sorted_resorts() {
        let mut menus = NetworkMenus::new();
        menus.insert_sorted(MenuKind::Connect, id(1), "Alpha");
        menus.insert_sorted(MenuKind::Connect, id(2), "Zeta");

        menus.insert_sorted(MenuKind::Connect, id(1), "Omega");
        assert_eq!(names(&menus, MenuKind::Connect), vec!["Omega", "Zeta"]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut menus = NetworkMenus::new();
        menus.insert_sorted(MenuKind::Connect, id(1), "Alpha");
        menus.remove(id(42));
        assert_eq!(menus.data_count(MenuKind::Connect), 1);
        assert_sentinels_trail(&menus, MenuKind::Connect);
    }

    #[test]
    fn sentinels_survive_churn() {
        let mut menus = NetworkMenus::new();
        for i in 0..20u32 {
            let kind = if i % 2 == 0 {
                MenuKind::Connect
            } else {
                MenuKind::Disconnect
            };
            menus.insert_sorted(kind, id(i), &format!("net-{i}"));
        }
        for i in (0..20u32).step_by(3) {
            menus.remove(id(i));
        }
        assert_sentinels_trail(&menus, MenuKind::Connect);
        assert_sentinels_trail(&menus, MenuKind::Disconnect);
    }

    #[test]
    fn custom_collator_is_honored() {
        // Byte-order collation puts uppercase first.
        let mut menus = NetworkMenus::with_collator(|a, b| a.cmp(b));
        menus.insert_sorted(MenuKind::Connect, id(1), "mu");
        menus.insert_sorted(MenuKind::Connect, id(2), "Zeta");
        assert_eq!(names(&menus, MenuKind::Connect), vec!["Zeta", "mu"]);
    }
}
