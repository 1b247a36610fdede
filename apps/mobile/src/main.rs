//! # Jetstar POS Entry Point
//!
//! Opens the store, renders the Dashboard and exits.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Determine database path (`~/.jetstarpos/mobile.db`)
//! 4. Open the store (create if missing, ensure tables)
//! 5. Render the Dashboard to stdout
//! 6. Close the store

use tracing::info;

use jetstar_mobile::state::ConfigState;
use jetstar_mobile::{get_database_path, init_tracing, PosApp};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Jetstar POS");

    let config = ConfigState::from_env();
    let db_path = get_database_path()?;
    info!(?db_path, "Database path determined");

    let app = PosApp::open(config, &db_path).await?;

    let view = app.render().await?;
    print!("{}", view);

    app.close().await;
    Ok(())
}
