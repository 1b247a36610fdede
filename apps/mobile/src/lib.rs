//! # Jetstar Mobile Library
//!
//! Application shell for Jetstar POS: state, navigation and the five
//! screens, rendered as view models.
//!
//! ## Module Organization
//! ```text
//! jetstar_mobile/
//! ├── lib.rs          ◄─── You are here (startup, PosApp)
//! ├── navigation.rs   ◄─── Screen names and the Navigator
//! ├── state/
//! │   ├── mod.rs      ◄─── AppContext
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── screens/
//! │   ├── dashboard.rs
//! │   ├── sell.rs     ◄─── Cart and checkout
//! │   ├── stock.rs
//! │   ├── expenses.rs
//! │   └── reports.rs
//! └── error.rs        ◄─── AppError
//! ```

pub mod error;
pub mod navigation;
pub mod screens;
pub mod state;

use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::{AppError, AppResult};
use navigation::{Navigator, Screen};
use screens::{CheckoutReceipt, SellScreen, View};
use state::{AppContext, ConfigState, DbState};

/// Directory under the home directory holding the store.
pub const DATA_DIR_NAME: &str = ".jetstarpos";

/// Store file name.
pub const DATABASE_FILE_NAME: &str = "mobile.db";

/// The running app: context, current screen and the Sell screen's cart.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env()                                           │
/// │                                                                         │
/// │  3. Determine Database Path ──────────────────────────────────────────► │
/// │     • ~/.jetstarpos/mobile.db, or JETSTAR_DB_PATH                       │
/// │                                                                         │
/// │  4. PosApp::open ─────────────────────────────────────────────────────► │
/// │     • create dir + file if missing, ensure tables                       │
/// │     • navigator on Dashboard, empty cart                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct PosApp {
    ctx: AppContext,
    navigator: Navigator,
    sell: SellScreen,
}

impl PosApp {
    /// Opens the store at `db_path` and starts on the Dashboard.
    pub async fn open(config: ConfigState, db_path: &Path) -> AppResult<Self> {
        info!(path = %db_path.display(), "Opening store");
        let db = DbState::open(db_path).await?;
        Ok(PosApp::new(AppContext::new(db, config)))
    }

    pub fn new(ctx: AppContext) -> Self {
        PosApp {
            ctx,
            navigator: Navigator::new(),
            sell: SellScreen::new(),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.navigator.go(screen);
    }

    /// Sell screen state (cart, search box).
    pub fn sell(&mut self) -> &mut SellScreen {
        &mut self.sell
    }

    /// Checks out the Sell screen's cart; on success the app is back on the
    /// Dashboard.
    pub async fn checkout(&mut self) -> AppResult<Option<CheckoutReceipt>> {
        self.sell.checkout(&self.ctx, &mut self.navigator).await
    }

    /// Renders the current screen.
    pub async fn render(&self) -> AppResult<View> {
        let view = match self.navigator.current() {
            Screen::Dashboard => View::Dashboard(screens::dashboard::render(&self.ctx).await?),
            Screen::Sell => View::Sell(self.sell.render(&self.ctx).await?),
            Screen::Stock => View::Stock(screens::stock::render(&self.ctx).await?),
            Screen::Expenses => View::Expenses(screens::expenses::render(&self.ctx).await?),
            Screen::Reports => View::Reports(screens::reports::render(&self.ctx).await?),
        };
        Ok(view)
    }

    /// Closes the store.
    pub async fn close(self) {
        info!("Shutting down");
        self.ctx.db().close().await;
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=jetstar_db=trace` - Show trace for one crate only
/// - Default: INFO, DEBUG for the jetstar crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,jetstar=debug,sqlx=warn"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Determines the store path.
///
/// ## Default
/// `~/.jetstarpos/mobile.db` on every platform.
///
/// ## Override
/// Set `JETSTAR_DB_PATH` to use a custom path.
pub fn get_database_path() -> AppResult<PathBuf> {
    if let Some(path) = std::env::var_os("JETSTAR_DB_PATH").filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let base = BaseDirs::new()
        .ok_or_else(|| AppError::internal("Could not determine home directory"))?;

    Ok(base.home_dir().join(DATA_DIR_NAME).join(DATABASE_FILE_NAME))
}
