use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use sqlx::SqlitePool;

use crate::auth::password::hash_password;
use crate::database::models::{Company, Contract, User};
use crate::types::Role;

/// Demo users; passwords are hashed before they hit the store.
const DEMO_USERS: [(&str, &str, Role, &str); 3] = [
    ("hervaldantas", "123456789", Role::Admin, "admin@SoftwareHouse.com"),
    ("antoniodantas", "123456", Role::User, "user@SoftwareHouse.com"),
    ("renatodantas", "123", Role::Admin, "colab@SoftwareHouse.com"),
];

/// Demo companies, each with one contract starting on the given day.
const DEMO_COMPANIES: [(&str, (i32, u32, u32)); 3] = [
    ("Dantas Corporation", (2024, 9, 13)),
    ("Ronan Mineradora", (2024, 9, 14)),
    ("Tecnologia Corporation", (2024, 9, 15)),
];

/// On startup, if the store is empty, insert the fixed demo dataset.
/// Skipping on a populated store keeps reruns idempotent.
pub async fn seed_demo_data(pool: &SqlitePool) -> anyhow::Result<()> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(1) FROM users")
        .fetch_one(pool)
        .await?;

    if count.0 > 0 {
        tracing::debug!("demo data already present, skipping seed");
        return Ok(());
    }

    for (username, password, role, email) in DEMO_USERS {
        let hash = hash_password(password)?;
        User::create(pool, username, &hash, role, email).await?;
    }

    for (name, (year, month, day)) in DEMO_COMPANIES {
        let company = Company::create(pool, name).await?;
        let start = NaiveDate::from_ymd_opt(year, month, day)
            .context("invalid seed contract date")?
            .and_time(NaiveTime::MIN)
            .and_utc();
        Contract::create(pool, start, company.id).await?;
    }

    tracing::info!("Seeded demo users, companies and contracts");
    Ok(())
}
