use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use gtk::prelude::*;
use log::*;
use relm4::factory::{DynamicIndex, FactoryVecDeque};
use relm4::gtk;
use relm4::prelude::*;
use relm4_components::open_button::{OpenButton, OpenButtonSettings};
use relm4_components::open_dialog::OpenDialogSettings;

use irc_toolbar_gui::actions::{ActionId, ToolbarKind};
use irc_toolbar_gui::config::parse_config;
use irc_toolbar_gui::network::{ConnectionState, NetworkDirectory, NetworkEvent, NetworkId};
use irc_toolbar_gui::network_row::{NetworkRow, NetworkRowInit, NetworkRowMsg, NetworkRowOutput};
use irc_toolbar_gui::provider::ToolbarActionProvider;
use irc_toolbar_gui::toast::ToastManager;
use irc_toolbar_gui::toolbar::Toolbar;
use irc_toolbar_gui::{cli, utils};

/// How long a simulated connect/disconnect takes to settle.
const SETTLE_DELAY: Duration = Duration::from_millis(800);

struct App {
    directory: NetworkDirectory,
    provider: ToolbarActionProvider,
    networks: FactoryVecDeque<NetworkRow>,
    import_button: Controller<OpenButton>,
    toast: ToastManager,
}

#[derive(Debug)]
enum AppMsg {
    /// Forwarded directory notifications; processed in emission order.
    Directory(NetworkEvent),
    AddNetwork,
    RemoveNetwork(DynamicIndex),
    ToggleNetwork(DynamicIndex),
    /// A per-network entry in one of the drop-down menus was triggered.
    NetworkMenuClicked(NetworkId),
    ActionClicked(ActionId),
    ImportNetworks(PathBuf),
    ConnectionSettled(NetworkId),
    DisconnectionSettled(NetworkId),
}

struct AppWidgets {
    network_toolbar: Toolbar,
    nick_toolbar: Toolbar,
}

impl App {
    fn row_index(&self, id: NetworkId) -> Option<usize> {
        self.networks.iter().position(|row| row.id == id)
    }

    fn row_id(&self, index: &DynamicIndex) -> Option<NetworkId> {
        self.networks.get(index.current_index()).map(|row| row.id)
    }

    fn add_from_configs(&mut self, cfgs: Vec<irc_toolbar_gui::config::NetworkConfig>) {
        for cfg in cfgs {
            let name = cfg.name.clone().unwrap_or_else(|| "unknown".into());
            let id = self.directory.add_network(name, cfg.server.clone());
            if cfg.autoconnect_enabled() {
                self.directory.request_connect(id);
            }
        }
    }

    fn dispatch_action(&mut self, action: ActionId) {
        match action {
            ActionId::ConnectAll => self.provider.connect_all(&mut self.directory),
            ActionId::DisconnectAll => self.provider.disconnect_all(&mut self.directory),
            // Channel and nick actions operate on the client session,
            // which lives outside this shell.
            other => debug!("No local handler for {other:?}"),
        }
    }
}

impl SimpleComponent for App {
    type Init = ();
    type Input = AppMsg;
    type Output = ();
    type Root = gtk::Window;
    type Widgets = AppWidgets;

    fn init_root() -> Self::Root {
        gtk::Window::builder()
            .title("IRC Networks")
            .default_width(520)
            .default_height(380)
            .build()
    }

    fn init(
        _params: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let directory = NetworkDirectory::new();
        let event_sender = sender.input_sender().clone();
        directory.subscribe(move |ev| event_sender.emit(AppMsg::Directory(*ev)));

        let provider = ToolbarActionProvider::new();

        let networks = FactoryVecDeque::builder()
            .launch(gtk::ListBox::default())
            .forward(sender.input_sender(), |output| match output {
                NetworkRowOutput::Toggle(idx) => AppMsg::ToggleNetwork(idx),
                NetworkRowOutput::Remove(idx) => AppMsg::RemoveNetwork(idx),
            });

        let import_button = OpenButton::builder()
            .launch(OpenButtonSettings {
                dialog_settings: OpenDialogSettings {
                    folder_mode: false,
                    accept_label: String::from("Import"),
                    cancel_label: String::from("Cancel"),
                    create_folders: false,
                    is_modal: true,
                    filters: vec![{
                        let filter = gtk::FileFilter::new();
                        filter.add_pattern("*.conf");
                        filter
                    }],
                },
                text: "Import Networks",
                recently_opened_files: None,
                max_recent_files: 0,
            })
            .forward(sender.input_sender(), AppMsg::ImportNetworks);

        let action_sender = sender.input_sender().clone();
        let on_action: Rc<dyn Fn(ActionId)> =
            Rc::new(move |id| action_sender.emit(AppMsg::ActionClicked(id)));
        let network_sender = sender.input_sender().clone();
        let on_network: Rc<dyn Fn(NetworkId)> =
            Rc::new(move |id| network_sender.emit(AppMsg::NetworkMenuClicked(id)));

        let network_toolbar = Toolbar::new(
            ToolbarKind::Network,
            provider.actions(),
            on_action.clone(),
            on_network.clone(),
        );
        let nick_toolbar = Toolbar::new(ToolbarKind::Nick, provider.actions(), on_action, on_network);

        let vbox = gtk::Box::new(gtk::Orientation::Vertical, 5);
        vbox.append(&network_toolbar.root);
        vbox.append(&nick_toolbar.root);

        let scrolled = gtk::ScrolledWindow::new();
        scrolled.set_vexpand(true);
        scrolled.set_child(Some(networks.widget()));
        vbox.append(&scrolled);

        let bottom = gtk::Box::new(gtk::Orientation::Horizontal, 5);
        let add_button = gtk::Button::with_label("Add Network");
        let add_sender = sender.input_sender().clone();
        add_button.connect_clicked(move |_| add_sender.emit(AppMsg::AddNetwork));
        bottom.append(&add_button);
        bottom.append(import_button.widget());
        vbox.append(&bottom);

        let toast = ToastManager::default();
        toast.overlay_widget().set_child(Some(&vbox));
        root.set_child(Some(toast.overlay_widget()));

        let mut model = App {
            directory,
            provider,
            networks,
            import_button,
            toast,
        };

        match utils::load_existing_networks(cli::get_configs_dir()) {
            Ok(cfgs) => model.add_from_configs(cfgs),
            Err(err) => {
                warn!("Could not load existing networks: {err:#}");
                model
                    .toast
                    .show_error(&format!("Could not load existing networks: {err:#}"));
            }
        }

        let widgets = AppWidgets {
            network_toolbar,
            nick_toolbar,
        };
        widgets
            .network_toolbar
            .refresh(model.provider.actions(), model.provider.menus());
        widgets
            .nick_toolbar
            .refresh(model.provider.actions(), model.provider.menus());

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Directory(ev) => {
                self.provider.handle_event(&self.directory, ev);
                match ev {
                    NetworkEvent::Created(id) => {
                        if let Some(net) = self.directory.network(id) {
                            self.networks.guard().push_back(NetworkRowInit {
                                id,
                                name: net.name.clone(),
                                state: net.state,
                            });
                        }
                    }
                    NetworkEvent::Removed(id) => {
                        if let Some(pos) = self.row_index(id) {
                            self.networks.guard().remove(pos);
                        }
                    }
                    NetworkEvent::Updated(id) => {
                        let Some(net) = self.directory.network(id) else {
                            return;
                        };
                        if let Some(pos) = self.row_index(id) {
                            self.networks.send(
                                pos,
                                NetworkRowMsg::Refresh {
                                    name: net.name.clone(),
                                    state: net.state,
                                },
                            );
                        }
                        // Stand-in for the actual session machinery: a
                        // pending request settles a moment later and
                        // reports back like any other remote update.
                        match net.state {
                            ConnectionState::Connecting => {
                                let sender = sender.clone();
                                relm4::spawn(async move {
                                    tokio::time::sleep(SETTLE_DELAY).await;
                                    sender.input(AppMsg::ConnectionSettled(id));
                                });
                            }
                            ConnectionState::Disconnecting => {
                                let sender = sender.clone();
                                relm4::spawn(async move {
                                    tokio::time::sleep(SETTLE_DELAY).await;
                                    sender.input(AppMsg::DisconnectionSettled(id));
                                });
                            }
                            _ => (),
                        }
                    }
                }
            }
            AppMsg::AddNetwork => {
                let n = self.directory.len() + 1;
                self.directory.add_network(format!("New network {n}"), None);
            }
            AppMsg::RemoveNetwork(idx) => {
                if let Some(id) = self.row_id(&idx) {
                    self.directory.remove_network(id);
                }
            }
            AppMsg::ToggleNetwork(idx) => {
                if let Some(id) = self.row_id(&idx) {
                    self.provider.connect_or_disconnect(&mut self.directory, id);
                }
            }
            AppMsg::NetworkMenuClicked(id) => {
                self.provider.connect_or_disconnect(&mut self.directory, id);
            }
            AppMsg::ActionClicked(action) => self.dispatch_action(action),
            AppMsg::ImportNetworks(path) => {
                let parsed = std::fs::read_to_string(&path)
                    .map_err(|e| e.to_string())
                    .and_then(|c| parse_config(&c));
                match parsed {
                    Ok(mut cfgs) => {
                        for cfg in cfgs.iter_mut() {
                            if cfg.name.is_none() {
                                cfg.name = path
                                    .file_stem()
                                    .and_then(|s| s.to_str())
                                    .map(|s| s.to_owned());
                            }
                        }
                        let count = cfgs.len();
                        self.add_from_configs(cfgs);
                        self.toast
                            .show_info(&format!("Imported {count} network(s)"));
                    }
                    Err(err) => {
                        error!("Could not import {}: {}", path.display(), err);
                        self.toast
                            .show_error(&format!("Could not import {}: {}", path.display(), err));
                    }
                }
            }
            AppMsg::ConnectionSettled(id) => {
                self.directory
                    .set_connection_state(id, ConnectionState::Connected);
            }
            AppMsg::DisconnectionSettled(id) => {
                self.directory
                    .set_connection_state(id, ConnectionState::Disconnected);
            }
        }
    }

    fn update_view(&self, widgets: &mut Self::Widgets, _sender: ComponentSender<Self>) {
        widgets
            .network_toolbar
            .refresh(self.provider.actions(), self.provider.menus());
        widgets
            .nick_toolbar
            .refresh(self.provider.actions(), self.provider.menus());
    }
}

fn main() {
    cli::init_logging();

    let app = RelmApp::new("relm4.ghaf.irc-toolbar-gui");
    app.run::<App>(());
}
