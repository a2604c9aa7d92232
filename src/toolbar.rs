use std::rc::Rc;

use gtk::prelude::*;
use relm4::gtk;

use crate::actions::{ActionId, ActionRegistry, ToolbarKind, toolbar_actions};
use crate::menu::{MenuEntry, MenuKind, NetworkMenus};
use crate::network::NetworkId;

enum ActionWidget {
    Plain(gtk::Button),
    /// Aggregate action with the sorted container attached as drop-down.
    WithMenu {
        button: gtk::MenuButton,
        menu_box: gtk::Box,
    },
}

/// Hand-built toolbar for one of the fixed compositions. The aggregate
/// connect/disconnect buttons carry popovers that `refresh` rebuilds
/// from the current container contents.
pub struct Toolbar {
    pub root: gtk::Box,
    items: Vec<(ActionId, ActionWidget)>,
    on_action: Rc<dyn Fn(ActionId)>,
    on_network: Rc<dyn Fn(NetworkId)>,
}

impl Toolbar {
    pub fn new(
        kind: ToolbarKind,
        registry: &ActionRegistry,
        on_action: Rc<dyn Fn(ActionId)>,
        on_network: Rc<dyn Fn(NetworkId)>,
    ) -> Self {
        let root = gtk::Box::new(gtk::Orientation::Horizontal, 5);
        let mut items = Vec::new();

        for &id in toolbar_actions(kind) {
            let Some(action) = registry.action(id) else {
                continue;
            };

            let widget = match id {
                ActionId::ConnectAll | ActionId::DisconnectAll => {
                    let button = gtk::MenuButton::new();
                    button.set_label(action.text);
                    button.set_tooltip_text(Some(action.tooltip));

                    let menu_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
                    let popover = gtk::Popover::new();
                    popover.set_child(Some(&menu_box));
                    button.set_popover(Some(&popover));

                    root.append(&button);
                    ActionWidget::WithMenu { button, menu_box }
                }
                _ => {
                    let button = gtk::Button::with_label(action.text);
                    button.set_tooltip_text(Some(action.tooltip));

                    let callback = on_action.clone();
                    button.connect_clicked(move |_| callback(id));

                    root.append(&button);
                    ActionWidget::Plain(button)
                }
            };
            items.push((id, widget));

            // The nick bar groups conversation actions apart from the
            // channel-mode ones.
            if kind == ToolbarKind::Nick && id == ActionId::NickWhois {
                root.append(&gtk::Separator::new(gtk::Orientation::Vertical));
            }
        }

        Self {
            root,
            items,
            on_action,
            on_network,
        }
    }

    /// Applies the current enabled flags and rebuilds the drop-down
    /// contents of the aggregate buttons.
    pub fn refresh(&self, registry: &ActionRegistry, menus: &NetworkMenus) {
        for (id, widget) in &self.items {
            let enabled = registry.is_enabled(*id);
            match widget {
                ActionWidget::Plain(button) => button.set_sensitive(enabled),
                ActionWidget::WithMenu { button, menu_box } => {
                    button.set_sensitive(enabled);
                    let kind = match id {
                        ActionId::ConnectAll => MenuKind::Connect,
                        _ => MenuKind::Disconnect,
                    };
                    self.rebuild_menu(menu_box, menus, kind);
                }
            }
        }
    }

    fn rebuild_menu(&self, menu_box: &gtk::Box, menus: &NetworkMenus, kind: MenuKind) {
        while let Some(child) = menu_box.first_child() {
            menu_box.remove(&child);
        }

        for entry in menus.menu(kind).entries() {
            match entry {
                MenuEntry::Network { id, name } => {
                    let item = gtk::Button::with_label(name);
                    item.add_css_class("flat");
                    let callback = self.on_network.clone();
                    let id = *id;
                    item.connect_clicked(move |_| callback(id));
                    menu_box.append(&item);
                }
                MenuEntry::Separator => {
                    menu_box.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
                }
                MenuEntry::BulkAction { action, label } => {
                    let item = gtk::Button::with_label(label);
                    item.add_css_class("flat");
                    let callback = self.on_action.clone();
                    let action = *action;
                    item.connect_clicked(move |_| callback(action));
                    menu_box.append(&item);
                }
            }
        }
    }
}
