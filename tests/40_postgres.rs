//! Runs against a live PostgreSQL when `DATABASE_URL` is set; otherwise
//! every test returns early.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use chrono::{TimeZone, Utc};
use sqlx::PgPool;

use customer_api::config::DatabaseConfig;
use customer_api::database::models::Customer;
use customer_api::database::{CustomerGateway, DatabaseManager, PgCustomerGateway};
use customer_api::filter::build_filter;

async fn connect() -> Result<Option<PgPool>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping postgres test");
        return Ok(None);
    };
    let config = DatabaseConfig {
        url: Some(url),
        max_connections: 2,
        connection_timeout: 5,
    };
    let pool = DatabaseManager::connect(&config).await?;

    // Test binaries run in parallel; concurrent CREATE TABLE IF NOT EXISTS can still collide
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(7305)").execute(&mut *tx).await?;
    sqlx::query(include_str!("../sql/customers.sql")).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(Some(pool))
}

/// Company name unique to this run so concurrent runs never see each other's rows
fn run_tag(label: &str) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or_default();
    format!("{}-{}", label, nanos)
}

fn customer(company: &str, kind: &str, state: &str) -> Customer {
    Customer {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        company_name: company.to_string(),
        bankruptcy_indicator_flag: false,
        legal_entity_state: state.to_string(),
        legal_entity_type: kind.to_string(),
        date_of_birth: Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).single(),
        created_date: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single(),
        ..Default::default()
    }
}

#[tokio::test]
async fn postgres_create_then_get_returns_same_record() -> Result<()> {
    let Some(pool) = connect().await? else {
        return Ok(());
    };
    let gateway = PgCustomerGateway::new(pool);

    let input = customer(&run_tag("roundtrip"), "individual", "active");
    let id = gateway.create(&input).await?;
    assert!(id > 0);

    let stored = gateway.get_by_id(id).await?;
    assert_eq!(stored, Some(input.with_id(id)));

    gateway.delete(id).await?;
    Ok(())
}

#[tokio::test]
async fn postgres_search_reads_legacy_state_column() -> Result<()> {
    let Some(pool) = connect().await? else {
        return Ok(());
    };
    let gateway = PgCustomerGateway::new(pool);

    let tag = run_tag("search");
    let hit = gateway.create(&customer(&tag, "individual", "active")).await?;
    let wrong_state = gateway.create(&customer(&tag, "individual", "dormant")).await?;
    let wrong_type = gateway.create(&customer(&tag, "company", "active")).await?;

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    params.insert("company_name".to_string(), vec![tag.clone()]);
    params.insert("legal_entity_type".to_string(), vec!["individual".to_string()]);
    params.insert("legal_entity_state".to_string(), vec!["active".to_string()]);
    let filter = build_filter(&params)?;

    let found = gateway.search(&filter).await?;
    let ids: Vec<i64> = found.iter().map(|c| c.legal_entity_id).collect();
    assert_eq!(ids, vec![hit]);
    assert_eq!(found[0].legal_entity_state, "active");

    params.insert("match".to_string(), vec!["any".to_string()]);
    params.insert("company_name".to_string(), vec!["no-such-company".to_string()]);
    params.insert("legal_entity_type".to_string(), vec!["no-such-type".to_string()]);
    params.insert("legal_entity_state".to_string(), vec!["dormant".to_string()]);
    let any = gateway.search(&build_filter(&params)?).await?;
    assert!(any.iter().any(|c| c.legal_entity_id == wrong_state));

    for id in [hit, wrong_state, wrong_type] {
        gateway.delete(id).await?;
    }
    Ok(())
}

#[tokio::test]
async fn postgres_update_missing_reports_zero_rows() -> Result<()> {
    let Some(pool) = connect().await? else {
        return Ok(());
    };
    let gateway = PgCustomerGateway::new(pool);

    let affected = gateway.update(i64::MAX, &customer(&run_tag("ghost"), "individual", "active")).await?;
    assert_eq!(affected, 0);
    assert_eq!(gateway.delete(i64::MAX).await?, 0);
    Ok(())
}

#[tokio::test]
async fn postgres_update_then_delete() -> Result<()> {
    let Some(pool) = connect().await? else {
        return Ok(());
    };
    let gateway = PgCustomerGateway::new(pool);

    let id = gateway.create(&customer(&run_tag("lifecycle"), "individual", "active")).await?;

    let mut changed = customer(&run_tag("lifecycle"), "company", "dormant");
    changed.bankruptcy_indicator_flag = true;
    changed.date_of_birth = None;
    assert_eq!(gateway.update(id, &changed).await?, 1);
    assert_eq!(gateway.get_by_id(id).await?, Some(changed.with_id(id)));

    assert_eq!(gateway.delete(id).await?, 1);
    assert_eq!(gateway.get_by_id(id).await?, None);
    Ok(())
}
