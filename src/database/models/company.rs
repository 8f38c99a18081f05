use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::database::pool::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Company>, DatabaseError> {
        let companies = sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY id")
            .fetch_all(pool)
            .await?;

        Ok(companies)
    }

    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Company, DatabaseError> {
        let now = Utc::now();
        let result =
            sqlx::query("INSERT INTO companies (name, created_at, updated_at) VALUES (?, ?, ?)")
                .bind(name)
                .bind(now)
                .bind(now)
                .execute(pool)
                .await?;

        Ok(Company {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}
