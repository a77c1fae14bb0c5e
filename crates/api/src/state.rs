use std::sync::Arc;

use directory_core::config::Settings;
use directory_store::ChannelStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ChannelStore>,
    pub settings: Arc<Settings>,
}

#[derive(Debug, Clone)]
pub struct RequestId(pub String);
