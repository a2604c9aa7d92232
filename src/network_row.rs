use gtk::prelude::*;
use relm4::gtk;
use relm4::prelude::*;

use crate::network::{ConnectionState, NetworkId};

/// One list row per known network. The row itself is read-only state;
/// all mutation goes through the directory and comes back as a refresh.
#[derive(Debug)]
pub struct NetworkRow {
    pub id: NetworkId,
    pub name: String,
    pub state: ConnectionState,
}

#[derive(Debug)]
pub struct NetworkRowInit {
    pub id: NetworkId,
    pub name: String,
    pub state: ConnectionState,
}

#[derive(Debug)]
pub enum NetworkRowMsg {
    Refresh {
        name: String,
        state: ConnectionState,
    },
}

#[derive(Debug)]
pub enum NetworkRowOutput {
    /// Connect or disconnect, depending on the current state.
    Toggle(DynamicIndex),
    Remove(DynamicIndex),
}

impl NetworkRow {
    fn toggle_label(&self) -> &'static str {
        if self.state == ConnectionState::Disconnected {
            "Connect"
        } else {
            "Disconnect"
        }
    }
}

#[relm4::factory(pub)]
impl FactoryComponent for NetworkRow {
    type Init = NetworkRowInit;
    type Input = NetworkRowMsg;
    type Output = NetworkRowOutput;
    type CommandOutput = ();
    type ParentWidget = gtk::ListBox;

    view! {
        #[root]
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 5,

            gtk::Label {
                set_hexpand: true,
                set_halign: gtk::Align::Start,
                #[watch]
                set_label: &self.name,
            },

            gtk::Label {
                add_css_class: "dim-label",
                #[watch]
                set_label: &self.state.to_string(),
            },

            gtk::Button {
                #[watch]
                set_label: self.toggle_label(),
                connect_clicked[sender, index] => move |_| {
                    sender.output(Self::Output::Toggle(index.clone())).unwrap();
                },
            },

            gtk::Button::with_label("Remove") {
                connect_clicked[sender, index] => move |_| {
                    sender.output(Self::Output::Remove(index.clone())).unwrap();
                }
            },
        }
    }

    fn init_model(init: Self::Init, _index: &DynamicIndex, _sender: FactorySender<Self>) -> Self {
        Self {
            id: init.id,
            name: init.name,
            state: init.state,
        }
    }

    fn update(&mut self, msg: Self::Input, _sender: FactorySender<Self>) {
        match msg {
            Self::Input::Refresh { name, state } => {
                self.name = name;
                self.state = state;
            }
        }
    }
}
