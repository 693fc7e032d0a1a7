use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::database::gateway::CustomerGateway;
use crate::database::manager::DatabaseError;
use crate::database::models::Customer;
use crate::filter::FilterExpression;

/// Process-local `CustomerGateway`, used by tests and `--in-memory` runs.
pub struct MemoryCustomerGateway {
    table: RwLock<MemoryTable>,
}

struct MemoryTable {
    next_id: i64,
    rows: BTreeMap<i64, Customer>,
}

impl MemoryCustomerGateway {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MemoryTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryCustomerGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerGateway for MemoryCustomerGateway {
    async fn create(&self, customer: &Customer) -> Result<i64, DatabaseError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, customer.with_id(id));
        debug!("Inserted customer {}", id);
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, DatabaseError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Customer>, DatabaseError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, customer: &Customer) -> Result<u64, DatabaseError> {
        let mut table = self.table.write().await;
        let affected = match table.rows.get_mut(&id) {
            Some(row) => {
                *row = customer.with_id(id);
                1
            }
            None => 0,
        };
        debug!("Updated customer {}: {} rows affected", id, affected);
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let removed = self.table.write().await.rows.remove(&id);
        let affected = u64::from(removed.is_some());
        debug!("Deleted customer {}: {} rows affected", id, affected);
        Ok(affected)
    }

    async fn search(&self, filter: &FilterExpression) -> Result<Vec<Customer>, DatabaseError> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
