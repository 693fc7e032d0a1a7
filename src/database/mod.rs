pub mod gateway;
pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;

pub use gateway::CustomerGateway;
pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryCustomerGateway;
pub use postgres::PgCustomerGateway;
