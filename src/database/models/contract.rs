use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::database::pool::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contract {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub company_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Contracts for one company whose start date falls in `[from, to)`.
    pub async fn find_by_company_in_window(
        pool: &SqlitePool,
        company_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Contract>, DatabaseError> {
        let contracts = sqlx::query_as::<_, Contract>(
            "SELECT * FROM contracts \
             WHERE company_id = ? AND start_date >= ? AND start_date < ? \
             ORDER BY start_date",
        )
        .bind(company_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        Ok(contracts)
    }

    pub async fn create(
        pool: &SqlitePool,
        start_date: DateTime<Utc>,
        company_id: i64,
    ) -> Result<Contract, DatabaseError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO contracts (start_date, company_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(start_date)
        .bind(company_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(Contract {
            id: result.last_insert_rowid(),
            start_date,
            company_id,
            created_at: now,
            updated_at: now,
        })
    }
}
