use chrono::{DateTime, Utc};

use super::error::FilterError;
use super::types::FilterValue;
use crate::database::models::Customer;

/// Allow-list of searchable customer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CustomerField {
    LegalEntityId,
    FirstName,
    LastName,
    CompanyName,
    BankruptcyIndicatorFlag,
    LegalEntityState,
    LegalEntityType,
    DateOfBirth,
    CreatedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Bool,
    Text,
    Timestamp,
}

impl CustomerField {
    pub const ALL: [CustomerField; 9] = [
        CustomerField::LegalEntityId,
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::CompanyName,
        CustomerField::BankruptcyIndicatorFlag,
        CustomerField::LegalEntityState,
        CustomerField::LegalEntityType,
        CustomerField::DateOfBirth,
        CustomerField::CreatedDate,
    ];

    /// Resolve a request parameter name (the JSON field name).
    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.param_name() == name)
    }

    pub fn param_name(&self) -> &'static str {
        match self {
            CustomerField::LegalEntityId => "legal_entity_id",
            CustomerField::FirstName => "first_name",
            CustomerField::LastName => "last_name",
            CustomerField::CompanyName => "company_name",
            CustomerField::BankruptcyIndicatorFlag => "bankruptcy_indicator_flag",
            CustomerField::LegalEntityState => "legal_entity_state",
            CustomerField::LegalEntityType => "legal_entity_type",
            CustomerField::DateOfBirth => "date_of_birth",
            CustomerField::CreatedDate => "created_date",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            CustomerField::LegalEntityState => "legal_entity_stage",
            other => other.param_name(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            CustomerField::LegalEntityId => ColumnKind::Int,
            CustomerField::BankruptcyIndicatorFlag => ColumnKind::Bool,
            CustomerField::DateOfBirth | CustomerField::CreatedDate => ColumnKind::Timestamp,
            _ => ColumnKind::Text,
        }
    }

    pub fn parse_value(&self, raw: &str) -> Result<FilterValue, FilterError> {
        let invalid = || FilterError::InvalidValue {
            field: self.param_name().to_string(),
            value: raw.to_string(),
        };
        match self.kind() {
            ColumnKind::Int => raw.trim().parse().map(FilterValue::Int).map_err(|_| invalid()),
            ColumnKind::Bool => raw
                .trim()
                .to_ascii_lowercase()
                .parse()
                .map(FilterValue::Bool)
                .map_err(|_| invalid()),
            ColumnKind::Text => Ok(FilterValue::Text(raw.to_string())),
            ColumnKind::Timestamp => DateTime::parse_from_rfc3339(raw.trim())
                .map(|dt| FilterValue::Timestamp(dt.with_timezone(&Utc)))
                .map_err(|_| invalid()),
        }
    }

    /// Current value of this field on `customer`; `None` for a null column.
    pub fn value_of(&self, customer: &Customer) -> Option<FilterValue> {
        match self {
            CustomerField::LegalEntityId => Some(FilterValue::Int(customer.legal_entity_id)),
            CustomerField::FirstName => Some(FilterValue::Text(customer.first_name.clone())),
            CustomerField::LastName => Some(FilterValue::Text(customer.last_name.clone())),
            CustomerField::CompanyName => Some(FilterValue::Text(customer.company_name.clone())),
            CustomerField::BankruptcyIndicatorFlag => Some(FilterValue::Bool(customer.bankruptcy_indicator_flag)),
            CustomerField::LegalEntityState => Some(FilterValue::Text(customer.legal_entity_state.clone())),
            CustomerField::LegalEntityType => Some(FilterValue::Text(customer.legal_entity_type.clone())),
            CustomerField::DateOfBirth => customer.date_of_birth.map(FilterValue::Timestamp),
            CustomerField::CreatedDate => customer.created_date.map(FilterValue::Timestamp),
        }
    }
}
