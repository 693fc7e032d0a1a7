use std::collections::BTreeMap;

use super::error::FilterError;
use super::field::CustomerField;
use super::types::{Combinator, FilterCondition, FilterValue, SqlResult};
use crate::database::models::Customer;

/// Reserved parameter selecting the combinator
pub const MATCH_PARAM: &str = "match";

/// Parameterized predicate over the customers table
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpression {
    conditions: Vec<FilterCondition>,
    combinator: Combinator,
}

impl FilterExpression {
    pub fn new(conditions: Vec<FilterCondition>, combinator: Combinator) -> Result<Self, FilterError> {
        if conditions.is_empty() {
            return Err(FilterError::Empty);
        }
        Ok(Self { conditions, combinator })
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn to_sql(&self) -> SqlResult {
        let where_clause = self.to_where_sql();
        let query = format!(
            "SELECT {} FROM \"{}\" WHERE {} ORDER BY \"legal_entity_id\"",
            Customer::COLUMNS,
            Customer::TABLE,
            where_clause.query
        );
        SqlResult { query, params: where_clause.params }
    }

    pub fn to_where_sql(&self) -> SqlResult {
        let mut params = Vec::new();
        let mut parts = Vec::with_capacity(self.conditions.len());

        for condition in &self.conditions {
            let quoted_column = format!("\"{}\"", condition.field.column());
            let placeholders: Vec<String> = condition
                .values
                .iter()
                .map(|v| {
                    params.push(v.clone());
                    format!("${}", params.len())
                })
                .collect();

            let sql = if placeholders.len() == 1 {
                format!("{} = {}", quoted_column, placeholders[0])
            } else {
                format!("{} IN ({})", quoted_column, placeholders.join(", "))
            };
            parts.push(format!("({})", sql));
        }

        SqlResult { query: parts.join(self.combinator.to_sql()), params }
    }

    /// Evaluate the predicate against an in-memory row
    pub fn matches(&self, customer: &Customer) -> bool {
        let mut results = self.conditions.iter().map(|condition| {
            condition
                .field
                .value_of(customer)
                .map(|current| condition.values.contains(&current))
                .unwrap_or(false)
        });
        match self.combinator {
            Combinator::All => results.all(|hit| hit),
            Combinator::Any => results.any(|hit| hit),
        }
    }
}

/// Turn request query parameters into a filter.
///
/// Every name other than `match` must be a known customer field and every
/// value must parse as that field's type. Several values for the same
/// field match any of them.
pub fn build_filter(params: &BTreeMap<String, Vec<String>>) -> Result<FilterExpression, FilterError> {
    let mut combinator = Combinator::default();
    let mut conditions = Vec::new();

    for (name, raw_values) in params {
        if name == MATCH_PARAM {
            if let Some(raw) = raw_values.last() {
                combinator = raw.parse()?;
            }
            continue;
        }

        let field = CustomerField::from_param(name).ok_or_else(|| FilterError::UnknownField(name.clone()))?;
        let values = raw_values
            .iter()
            .map(|raw| field.parse_value(raw))
            .collect::<Result<Vec<FilterValue>, _>>()?;
        if values.is_empty() {
            continue;
        }
        conditions.push(FilterCondition { field, values });
    }

    FilterExpression::new(conditions, combinator)
}
