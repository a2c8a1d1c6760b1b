use crate::error::AppError;
use serde::Serialize;
use sqlx::SqlitePool;

/// `sqlite_schema` 테이블의 한 행 (테이블, 인덱스 등 스키마 객체)
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SchemaEntry {
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub tbl_name: String,
    pub rootpage: Option<i64>,
    pub sql: Option<String>,
}

/// 데이터베이스의 모든 스키마 객체를 조회합니다.
pub async fn list_schema(pool: &SqlitePool) -> Result<Vec<SchemaEntry>, AppError> {
    let entries = sqlx::query_as::<_, SchemaEntry>(
        "SELECT type, name, tbl_name, rootpage, sql FROM sqlite_schema ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// DB 연결이 살아 있는지 확인합니다.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
