use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use health_consult_migration::{Migrator, MigratorTrait};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use tracing::{debug, info};

/// SQLite 연결 옵션 (WAL, busy_timeout 등)
fn create_sqlite_options(path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(30))
        .foreign_keys(true)
}

async fn database_connection(path: &Path) -> Result<DatabaseConnection> {
    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .connect_with(create_sqlite_options(path))
        .await?;

    debug!("SQLite 연결 풀 생성 완료: {}", path.display());
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

async fn migrate_database(path: &Path) -> Result<()> {
    if !path.exists() {
        debug!("데이터베이스 파일이 없어 새로 생성합니다");
    }

    // 마이그레이션은 단일 연결 풀로 실행
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(create_sqlite_options(path))
        .await?;
    let connection = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.clone());

    Migrator::up(&connection, None).await?;

    pool.close().await;
    debug!("마이그레이션 완료, 마이그레이션용 연결 풀을 닫았습니다");
    Ok(())
}

/// 마이그레이션 후 데이터베이스 연결을 돌려준다
pub async fn setup_database(path: &Path) -> Result<DatabaseConnection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("데이터베이스 디렉터리 생성 실패: {}", parent.display()))?;
    }

    migrate_database(path).await.context("데이터베이스 마이그레이션 실패")?;
    let connection = database_connection(path).await.context("데이터베이스 연결 실패")?;

    info!("데이터베이스 준비 완료: {}", path.display());
    Ok(connection)
}

#[cfg(test)]
pub(crate) async fn setup_memory_database() -> DatabaseConnection {
    // 인메모리 DB 는 연결마다 따로 생기므로 연결 하나만 쓴다
    let options = sea_orm::ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let connection = sea_orm::Database::connect(options).await.unwrap();
    Migrator::up(&connection, None).await.unwrap();
    connection
}
