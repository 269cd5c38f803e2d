use serde_json::Value;
use sqlx::types::Json;
use tracing::debug;

use crate::application::repos::RepoError;
use crate::domain::posts::FaqItem;

/// Postgres `undefined_table`.
const SQLSTATE_UNDEFINED_TABLE: &str = "42P01";
/// PostgREST "table not found in schema cache".
const POSTGREST_TABLE_NOT_FOUND: &str = "PGRST205";

pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::Database(db) if is_schema_absent_code(db.code().as_deref()) => {
            RepoError::schema_absent(
                missing_relation(db.message()).unwrap_or_else(|| "unknown".to_string()),
            )
        }
        sqlx::Error::Database(db)
            if db
                .message()
                .contains("canceling statement due to statement timeout")
                || db
                    .message()
                    .contains("canceling statement due to user request") =>
        {
            RepoError::Timeout
        }
        sqlx::Error::PoolTimedOut => RepoError::Timeout,
        sqlx::Error::Io(err) => RepoError::Unavailable(err.to_string()),
        sqlx::Error::Tls(err) => RepoError::Unavailable(err.to_string()),
        sqlx::Error::PoolClosed => RepoError::Unavailable("connection pool closed".to_string()),
        err @ (sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)) => RepoError::Decode(err.to_string()),
        other => RepoError::from_persistence(other),
    }
}

pub(crate) fn is_schema_absent_code(code: Option<&str>) -> bool {
    matches!(
        code,
        Some(SQLSTATE_UNDEFINED_TABLE) | Some(POSTGREST_TABLE_NOT_FOUND)
    )
}

/// Decode a `faq` column item by item.
///
/// Entries that are not `{question, answer}` objects are skipped so one
/// hand-edited row cannot fail the whole query. An empty result is `None`.
pub(crate) fn lenient_faq(value: Option<Json<Value>>) -> Option<Vec<FaqItem>> {
    let Value::Array(entries) = value?.0 else {
        return None;
    };
    let total = entries.len();
    let items: Vec<FaqItem> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if items.len() < total {
        debug!(
            target = "infra::db::util",
            op = "lenient_faq",
            total,
            kept = items.len(),
            "Skipped malformed faq entries"
        );
    }
    (!items.is_empty()).then_some(items)
}

/// Extract `x` from `relation "x" does not exist`.
fn missing_relation(message: &str) -> Option<String> {
    let rest = message.strip_prefix("relation \"")?;
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}
