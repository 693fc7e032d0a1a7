pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod router;
pub mod shutdown;
pub mod state;

pub use router::app;
pub use state::AppState;
