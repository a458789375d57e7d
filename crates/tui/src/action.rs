//! Action protocol for keyboard dispatch and palette execution.
//!
//! Actions are the zero-argument side effects bound to shortcuts and
//! command palette items. Resolvers return them; the host `App` applies
//! them at the boundary.

use std::fmt;
use std::sync::Arc;

/// Host functionality reachable from shortcuts and quick actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Open the new task form
    NewTask,
    /// Switch between light and dark theme
    ToggleTheme,
    /// Reload dashboard data from the record source
    RefreshData,
    /// Move the calendar to today
    JumpToToday,
}

/// A named zero-argument callback supplied by the embedding host.
#[derive(Clone)]
pub struct Callback {
    name: Arc<str>,
    func: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Wrap a closure under a display name.
    pub fn new(name: impl Into<Arc<str>>, func: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Name used in logs and activity records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the callback.
    pub fn call(&self) {
        (self.func)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback").field(&self.name).finish()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.func, &other.func)
    }
}

/// Side effect requested by a shortcut or palette item.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Route the dashboard to a path
    Navigate(String),
    /// Open the palette if closed, close it if open
    TogglePalette,
    /// Show or hide the keyboard shortcuts overlay
    ToggleHelp,
    /// Close whichever overlay is on top
    CancelOverlay,
    /// Quit the application
    Quit,
    /// Call into host functionality
    Host(HostCommand),
    /// Run an ad-hoc host callback
    Invoke(Callback),
}

impl Action {
    /// Short label for activity records and logs.
    pub fn label(&self) -> String {
        match self {
            Self::Navigate(path) => format!("navigate {}", path),
            Self::TogglePalette => "toggle palette".to_string(),
            Self::ToggleHelp => "toggle help".to_string(),
            Self::CancelOverlay => "cancel overlay".to_string(),
            Self::Quit => "quit".to_string(),
            Self::Host(command) => format!("{:?}", command),
            Self::Invoke(callback) => callback.name().to_string(),
        }
    }
}
