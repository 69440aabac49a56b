use std::sync::Arc;

use tokio::sync::RwLock;

use crate::history::History;

/// ハンドラ間で共有するアプリケーション状態
#[derive(Clone, Default)]
pub struct AppState {
    pub history: Arc<RwLock<History>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
