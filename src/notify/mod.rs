pub mod message;
pub mod telegram;

use async_trait::async_trait;

use crate::models::Application;

/// Relays an application to an external chat service.
///
/// Delivery is best-effort: failures are logged and reported as `false`,
/// never as an error the caller has to handle.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Whether destination credentials are present.
    fn is_configured(&self) -> bool;

    /// Send one notification. Returns `true` only when the remote side accepted it.
    async fn notify(&self, application: &Application) -> bool;
}
