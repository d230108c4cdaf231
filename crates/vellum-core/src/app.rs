//! Application host: plugin registration, event wiring, view collections.

use crate::error::Result;
use crate::events::EventBus;
use crate::options::OpOptions;
use crate::view::{View, ViewId};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// A capability installed onto an [`App`].
///
/// Registration is idempotent per app: the first `use_plugin` call for a
/// given name installs, later calls are no-ops.
pub trait Plugin {
    /// Registration name, unique per app.
    fn name(&self) -> &str;

    /// Runs once when the plugin is first registered.
    fn install(&self, app: &mut App) -> Result<()>;
}

/// Host for plugins, collections and the shared event bus.
#[derive(Debug)]
pub struct App {
    plugins: HashSet<String>,
    collections: HashMap<String, Collection>,
    events: Arc<EventBus>,
    defaults: OpOptions,
}

impl App {
    pub fn new() -> Self {
        Self {
            plugins: HashSet::new(),
            collections: HashMap::new(),
            events: Arc::new(EventBus::new()),
            defaults: OpOptions::default(),
        }
    }

    /// Register a plugin, returning whether it was newly installed.
    pub fn use_plugin(&mut self, plugin: &dyn Plugin) -> Result<bool> {
        if self.plugins.contains(plugin.name()) {
            debug!(plugin = plugin.name(), "plugin already registered");
            return Ok(false);
        }
        plugin.install(self)?;
        self.plugins.insert(plugin.name().to_string());
        Ok(true)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.contains(name)
    }

    /// The bus that receives lifecycle events from this app's views.
    pub fn events(&self) -> Arc<EventBus> {
        self.events.clone()
    }

    /// Option defaults applied to views created through this app.
    pub fn view_defaults(&self) -> &OpOptions {
        &self.defaults
    }

    pub fn set_view_defaults(&mut self, defaults: OpOptions) {
        self.defaults = defaults;
    }

    /// Create a view wired to this app's event bus and option defaults.
    pub fn view(&self, path: impl Into<PathBuf>) -> View {
        let mut view = View::new(path).with_options(self.defaults.clone());
        view.set_events(self.events.clone());
        view
    }

    /// Wire an existing view to this app's event bus.
    pub fn adopt(&self, view: &mut View) {
        view.set_events(self.events.clone());
    }

    /// Fetch or create a named collection.
    pub fn collection(&mut self, name: impl Into<String>) -> &mut Collection {
        let name = name.into();
        self.collections
            .entry(name.clone())
            .or_insert_with(|| Collection::new(name))
    }

    pub fn get_collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// A named group of views.
#[derive(Debug)]
pub struct Collection {
    name: String,
    views: Vec<View>,
}

impl Collection {
    fn new(name: String) -> Self {
        Self {
            name,
            views: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, view: View) -> ViewId {
        let id = view.id;
        self.views.push(view);
        id
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut View> {
        self.views.iter_mut()
    }
}
