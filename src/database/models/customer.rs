use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `customers` table.
///
/// Missing JSON fields fall back to their defaults so partial bodies are
/// accepted as-is. `legal_entity_id` is assigned by the store and ignored
/// on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Customer {
    pub legal_entity_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub bankruptcy_indicator_flag: bool,
    // Column keeps its legacy name
    #[sqlx(rename = "legal_entity_stage")]
    pub legal_entity_state: String,
    pub legal_entity_type: String,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub created_date: Option<DateTime<Utc>>,
}

impl Customer {
    pub const TABLE: &'static str = "customers";

    /// Column list in the order `FromRow` reads them.
    pub const COLUMNS: &'static str = "\"legal_entity_id\", \"first_name\", \"last_name\", \"company_name\", \
        \"bankruptcy_indicator_flag\", \"legal_entity_stage\", \"legal_entity_type\", \"date_of_birth\", \"created_date\"";

    /// Copy of `self` carrying the given identifier.
    pub fn with_id(&self, id: i64) -> Self {
        Self {
            legal_entity_id: id,
            ..self.clone()
        }
    }
}
