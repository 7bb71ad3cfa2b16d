use api::config::StoreConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub config: StoreConfig,
}

/// The stable, non-reactive application state shared through the Dioxus
/// context. Anything that can change at runtime lives in a signal instead.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: StoreConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }
}
