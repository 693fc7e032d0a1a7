use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::Customer;
use crate::filter::FilterExpression;

/// All reads and writes of customer records go through this trait.
///
/// Missing rows are never errors: lookups yield `None` and writes report
/// zero rows affected.
#[async_trait]
pub trait CustomerGateway: Send + Sync {
    /// Insert a customer; the identifier on `customer` is ignored.
    async fn create(&self, customer: &Customer) -> Result<i64, DatabaseError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, DatabaseError>;

    /// Every customer, ordered by identifier.
    async fn get_all(&self) -> Result<Vec<Customer>, DatabaseError>;

    /// Replace every field but the identifier. Returns rows affected.
    async fn update(&self, id: i64, customer: &Customer) -> Result<u64, DatabaseError>;

    async fn delete(&self, id: i64) -> Result<u64, DatabaseError>;

    async fn search(&self, filter: &FilterExpression) -> Result<Vec<Customer>, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}
