//! Placeholder data seeding
//!
//! Loads a small fixed data set for local development and demos. All
//! inserts carry fixed ids and `ON CONFLICT DO NOTHING`, so seeding is
//! idempotent and can run on every start when requested.

use crate::Result;
use sqlx::PgPool;
use tracing::info;

const CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    (
        "d6e15727-9fe1-45cb-a8af-f57b8e4d5910",
        "Hollis & Lane",
        "billing@hollislane.com",
        "/customers/hollis-lane.png",
    ),
    (
        "3958dc9e-712f-4377-85e9-fec4b6a6442a",
        "Merton Supply Co.",
        "accounts@mertonsupply.com",
        "/customers/merton-supply.png",
    ),
    (
        "3958dc9e-742f-4377-85e9-fec4b6a6442a",
        "Fernwood Studio",
        "hello@fernwood.studio",
        "/customers/fernwood-studio.png",
    ),
    (
        "76d65c26-f784-44a2-ac19-586678f7c2f2",
        "Quill Analytics",
        "finance@quillanalytics.io",
        "/customers/quill-analytics.png",
    ),
    (
        "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
        "Bram & Porter",
        "invoices@bramporter.com",
        "/customers/bram-porter.png",
    ),
    (
        "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
        "Northgate Freight",
        "payable@northgatefreight.com",
        "/customers/northgate-freight.png",
    ),
];

// (id, customer_id, amount in cents, status, date)
const INVOICES: &[(&str, &str, i64, &str, &str)] = &[
    (
        "9d482f7e-54d6-4d43-9e24-029a1a7e0f70",
        "d6e15727-9fe1-45cb-a8af-f57b8e4d5910",
        15795,
        "pending",
        "2025-12-06",
    ),
    (
        "5b1f2aa1-5a5c-4a4e-9b44-1a1f4b8fb2b1",
        "3958dc9e-712f-4377-85e9-fec4b6a6442a",
        20348,
        "pending",
        "2025-11-14",
    ),
    (
        "0a19354f-0f86-44cd-b4bb-1f1c2ad1d1b0",
        "76d65c26-f784-44a2-ac19-586678f7c2f2",
        300500,
        "paid",
        "2025-10-29",
    ),
    (
        "6ec42cb3-8b70-4ba7-927e-08dd6cb5e1c6",
        "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
        54246,
        "paid",
        "2025-09-10",
    ),
    (
        "f3c0ab4d-1137-4a3d-9caa-0a9d4a0f1a59",
        "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
        34577,
        "pending",
        "2025-08-05",
    ),
    (
        "83b2d0a5-7baf-4f55-8c7e-6cbdedeadbf0",
        "3958dc9e-742f-4377-85e9-fec4b6a6442a",
        66800,
        "pending",
        "2025-07-16",
    ),
    (
        "27a6159e-9d60-4b4c-9d6a-4452cbd0ed57",
        "d6e15727-9fe1-45cb-a8af-f57b8e4d5910",
        50000,
        "paid",
        "2025-06-27",
    ),
    (
        "b0f3c8a7-61a9-44e9-9c6b-2e12a9cbb00d",
        "76d65c26-f784-44a2-ac19-586678f7c2f2",
        8945,
        "paid",
        "2025-06-09",
    ),
    (
        "44e3c9a2-46b5-4b8e-b1c9-2de3e5d1a90b",
        "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
        125000,
        "paid",
        "2025-05-11",
    ),
    (
        "1a9071c9-61e3-4b9b-bb65-40cfbe3df8db",
        "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
        8546,
        "pending",
        "2025-04-17",
    ),
];

const REVENUE: &[(&str, i32)] = &[
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

/// Seed all placeholder data
pub async fn seed_database(pool: &PgPool) -> Result<()> {
    seed_customers(pool).await?;
    seed_invoices(pool).await?;
    seed_revenue(pool).await?;

    info!(
        "Seeded {} customers, {} invoices, {} revenue months",
        CUSTOMERS.len(),
        INVOICES.len(),
        REVENUE.len()
    );
    Ok(())
}

async fn seed_customers(pool: &PgPool) -> Result<()> {
    for (id, name, email, image_url) in CUSTOMERS {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1::uuid, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(image_url)
        .execute(pool)
        .await
        .map_err(seed_error)?;
    }

    Ok(())
}

async fn seed_invoices(pool: &PgPool) -> Result<()> {
    for (id, customer_id, amount, status, date) in INVOICES {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1::uuid, $2::uuid, $3, $4, $5::date)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(customer_id)
        .bind(amount)
        .bind(status)
        .bind(date)
        .execute(pool)
        .await
        .map_err(seed_error)?;
    }

    Ok(())
}

async fn seed_revenue(pool: &PgPool) -> Result<()> {
    for (month, revenue) in REVENUE {
        sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(month)
        .bind(revenue)
        .execute(pool)
        .await
        .map_err(seed_error)?;
    }

    Ok(())
}

fn seed_error(e: sqlx::Error) -> crate::Error {
    tracing::error!("Seeding failed: {}", e);
    crate::Error::Database("Failed to seed database.".to_string())
}
