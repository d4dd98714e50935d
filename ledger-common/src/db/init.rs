//! Database schema setup
//!
//! Creates the application tables if they do not exist. Safe to call on
//! every startup; existing tables and data are left untouched. There is
//! no migration tooling here, the schema is created in its final shape.

use crate::Result;
use sqlx::PgPool;
use tracing::info;

/// Create all application tables if needed
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    create_customers_table(pool).await?;
    create_invoices_table(pool).await?;
    create_revenue_table(pool).await?;

    info!("Database schema ready");
    Ok(())
}

async fn create_customers_table(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            image_url VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(schema_error)?;

    Ok(())
}

async fn create_invoices_table(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
            customer_id UUID NOT NULL,
            amount BIGINT NOT NULL,
            status VARCHAR(255) NOT NULL,
            date DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(schema_error)?;

    Ok(())
}

async fn create_revenue_table(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            month VARCHAR(4) NOT NULL UNIQUE,
            revenue INT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(schema_error)?;

    Ok(())
}

fn schema_error(e: sqlx::Error) -> crate::Error {
    tracing::error!("Schema setup failed: {}", e);
    crate::Error::Database("Failed to initialize database schema.".to_string())
}
