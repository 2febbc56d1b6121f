use crate::core::{
    catalog::ProjectCatalog,
    config::ConfigManager,
    error::Result,
    refresh::Refresher,
    settings::SettingsContext,
    store::Database,
};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything a command needs, opened once per process.
#[derive(Debug)]
pub struct AppContext {
    pub refresher: Refresher,
    pub config: ConfigManager,
    pub settings: SettingsContext,
}

impl AppContext {
    pub fn open(database: &Path, settings: &Path) -> Result<Self> {
        let catalog = ProjectCatalog::open(Database::open(database)?)?;
        let config = ConfigManager::new(Database::open(database)?);
        let settings = SettingsContext::load(settings)?;

        Ok(Self {
            refresher: Refresher::new(Arc::new(Mutex::new(catalog))),
            config,
            settings,
        })
    }

    pub fn catalog(&self) -> MutexGuard<'_, ProjectCatalog> {
        self.refresher.lock_catalog()
    }
}
