//! keydeck library
//!
//! This library provides the keyboard dispatcher, the fuzzy command palette
//! and the host shell that wires them into a terminal dashboard.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use keydeck::dispatcher::{KeyboardDispatcher, PaletteToggle};
//! use keydeck::input::key::KeyInput;
//! use keydeck::input::keymap::Keymap;
//! use keydeck::Action;
//! use keydeck_config::keybind::KeyCodeName;
//!
//! let mut dispatcher = KeyboardDispatcher::new(
//!     Keymap::default(),
//!     PaletteToggle::default(),
//!     Duration::from_millis(2000),
//! );
//! assert!(dispatcher.handle_key(&KeyInput::char('g')).is_empty());
//! let actions = dispatcher.handle_key(&KeyInput::plain(KeyCodeName::Char('t')));
//! assert_eq!(actions, vec![Action::Navigate("/tasks".to_string())]);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod dispatcher;
pub mod host;
pub mod input;
pub mod palette;
pub mod records;
pub mod runtime;
pub mod timer;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::{Action, HostCommand};
pub use app::App;
pub use dispatcher::KeyboardDispatcher;
pub use palette::PaletteController;
pub use ui::{FOOTER_HEIGHT, HEADER_HEIGHT};
