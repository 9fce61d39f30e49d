use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, instrument, trace};

use crate::config::{ServeConfig, initialize_app_state};
use crate::router::create_router;

#[instrument(skip(config), fields(bind = %config.bind_address))]
pub async fn serve(config: ServeConfig) -> Result<()> {
    info!("ChainFund frontend host starting up");
    debug!("Frontend directory: {}", config.dist_dir.display());

    let state = initialize_app_state(&config);

    trace!("Creating application router");
    let app = create_router(state);

    let listener = match TcpListener::bind(config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("ChainFund running on http://{}", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
