use std::future::Future;

use common::{MockClient, Result};

use crate::settings;

/// Marketplace client configured from the current settings.
pub fn client() -> MockClient {
    if settings::get_settings().fail_actions {
        log::debug!("Marketplace actions are set to fail");
        MockClient::failing("Simulated network failure")
    } else {
        MockClient::new()
    }
}

/// Awaits one marketplace action, logging its outcome.
pub async fn call<T, Fut>(action: &str, request: Fut) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    log::debug!("{} - Sending", action);

    match request.await {
        Ok(value) => {
            log::info!("{} - Success", action);
            Ok(value)
        }
        Err(e) => {
            log::error!("{} - {}", action, e);
            Err(e)
        }
    }
}
