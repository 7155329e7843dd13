//! Schema bootstrap
//!
//! The schema is created on startup with idempotent statements, so a fresh
//! database file works without a separate migration step.

use sqlx::SqlitePool;

const CREATE_POOLS: &str = r#"
CREATE TABLE IF NOT EXISTS pools (
    id INTEGER PRIMARY KEY,
    destination_id TEXT,
    destination_name TEXT NOT NULL,
    lat REAL,
    lng REAL,
    destination_address TEXT,
    departs_at TEXT NOT NULL,
    seats INTEGER NOT NULL,
    mode TEXT NOT NULL,
    notes TEXT,
    host_name TEXT NOT NULL,
    host_email TEXT NOT NULL,
    created_at TEXT NOT NULL,
    pickup TEXT
)
"#;

const CREATE_MEMBERS: &str = r#"
CREATE TABLE IF NOT EXISTS members (
    pool_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    joined_at TEXT NOT NULL,
    UNIQUE(pool_id, email)
)
"#;

const CREATE_MESSAGES: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY,
    pool_id INTEGER NOT NULL,
    sender_email TEXT NOT NULL,
    sender_name TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL
)
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_pools_departs_at ON pools(departs_at)",
    "CREATE INDEX IF NOT EXISTS idx_pools_host_email ON pools(host_email)",
    "CREATE INDEX IF NOT EXISTS idx_members_pool_id ON members(pool_id)",
    "CREATE INDEX IF NOT EXISTS idx_messages_pool_id ON messages(pool_id)",
];

/// Create tables and indexes if they do not exist
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_POOLS).execute(pool).await?;
    sqlx::query(CREATE_MEMBERS).execute(pool).await?;
    sqlx::query(CREATE_MESSAGES).execute(pool).await?;
    for stmt in CREATE_INDEXES {
        sqlx::query(stmt).execute(pool).await?;
    }
    Ok(())
}
