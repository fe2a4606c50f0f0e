use tokio::sync::RwLock;

use crate::models::Application;

/// Append-only, insertion-ordered application store. Lives as long as the process.
pub struct ApplicationStore {
    entries: RwLock<Vec<Application>>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn append(&self, application: Application) {
        self.entries.write().await.push(application);
    }

    /// Every stored application, oldest first.
    pub async fn all(&self) -> Vec<Application> {
        self.entries.read().await.clone()
    }

    /// The last `n` applications, newest first.
    pub async fn recent(&self, n: usize) -> Vec<Application> {
        let entries = self.entries.read().await;
        let start = entries.len().saturating_sub(n);
        entries[start..].iter().rev().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for ApplicationStore {
    fn default() -> Self {
        Self::new()
    }
}
