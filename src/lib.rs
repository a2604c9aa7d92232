/// Static action set, icon/text/tooltip registration and the fixed
/// toolbar compositions.
pub mod actions;
/// Command line arguments and logging setup.
pub mod cli;
/// Parser and structure that defines accepted network definition
/// file format.
pub mod config;
/// Typed event subscription registry.
pub mod events;
/// The two sorted drop-down containers for per-network entries.
pub mod menu;
/// Network directory: the authoritative set of known networks and its
/// change notifications.
pub mod network;
/// List row for one known network.
pub mod network_row;
/// Keeps per-network actions and the drop-down menus synchronized with
/// the network directory.
pub mod provider;
/// Toast notifications shown over the main window.
pub mod toast;
/// Hand-built toolbar widgets fed from the action registry.
pub mod toolbar;
/// Various utility functions
pub mod utils;
