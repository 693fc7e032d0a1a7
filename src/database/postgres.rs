use async_trait::async_trait;
use sqlx::{
    postgres::{PgArguments, PgRow},
    FromRow, PgPool, Postgres,
};
use tracing::debug;

use crate::database::gateway::CustomerGateway;
use crate::database::manager::DatabaseError;
use crate::database::models::Customer;
use crate::filter::{FilterExpression, FilterValue};

/// `CustomerGateway` over a shared PostgreSQL pool.
///
/// Each call checks one connection out of the pool, runs a single
/// statement on it and hands it back when the guard drops.
#[derive(Clone)]
pub struct PgCustomerGateway {
    pool: PgPool,
}

impl PgCustomerGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerGateway for PgCustomerGateway {
    async fn create(&self, customer: &Customer) -> Result<i64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO \"customers\" (\"first_name\", \"last_name\", \"company_name\", \"bankruptcy_indicator_flag\", \
             \"legal_entity_stage\", \"legal_entity_type\", \"date_of_birth\", \"created_date\") \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING \"legal_entity_id\"",
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.company_name)
        .bind(customer.bankruptcy_indicator_flag)
        .bind(&customer.legal_entity_state)
        .bind(&customer.legal_entity_type)
        .bind(customer.date_of_birth)
        .bind(customer.created_date)
        .fetch_one(&mut *conn)
        .await?;

        debug!("Inserted customer {}", id);
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let sql = format!(
            "SELECT {} FROM \"{}\" WHERE \"legal_entity_id\" = $1",
            Customer::COLUMNS,
            Customer::TABLE
        );
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<Customer>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let sql = format!(
            "SELECT {} FROM \"{}\" ORDER BY \"legal_entity_id\"",
            Customer::COLUMNS,
            Customer::TABLE
        );
        let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, customer: &Customer) -> Result<u64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            "UPDATE \"customers\" SET \"first_name\" = $2, \"last_name\" = $3, \"company_name\" = $4, \
             \"bankruptcy_indicator_flag\" = $5, \"legal_entity_stage\" = $6, \"legal_entity_type\" = $7, \
             \"date_of_birth\" = $8, \"created_date\" = $9 WHERE \"legal_entity_id\" = $1",
        )
        .bind(id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.company_name)
        .bind(customer.bankruptcy_indicator_flag)
        .bind(&customer.legal_entity_state)
        .bind(&customer.legal_entity_type)
        .bind(customer.date_of_birth)
        .bind(customer.created_date)
        .execute(&mut *conn)
        .await?;

        debug!("Updated customer {}: {} rows affected", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM \"customers\" WHERE \"legal_entity_id\" = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        debug!("Deleted customer {}: {} rows affected", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn search(&self, filter: &FilterExpression) -> Result<Vec<Customer>, DatabaseError> {
        let sql_result = filter.to_sql();
        let mut q = sqlx::query_as::<_, Customer>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }

        let mut conn = self.pool.acquire().await?;
        let rows = q.fetch_all(&mut *conn).await?;
        debug!("Search matched {} customers", rows.len());
        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    v: &'q FilterValue,
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    match v {
        FilterValue::Int(i) => q.bind(*i),
        FilterValue::Bool(b) => q.bind(*b),
        FilterValue::Text(s) => q.bind(s.as_str()),
        FilterValue::Timestamp(t) => q.bind(*t),
    }
}
