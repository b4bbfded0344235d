//! Start-up check that the tables match the column layout the repositories
//! read.
//!
//! The migration only creates missing tables, so a database file left by an
//! older portal build (plaintext `users.password`, nullable staff columns)
//! would pass migration and then fail on every query. [`verify_schema`]
//! reports that case up front.

use sqlx::SqlitePool;

/// Columns every table must carry, and whether each must be `NOT NULL`.
const EXPECTED: &[(&str, &[(&str, bool)])] = &[
    (
        "users",
        &[("id", false), ("username", true), ("password_hash", true), ("email", true)],
    ),
    (
        "staff",
        &[
            ("id", false),
            ("name", true),
            ("email", true),
            ("mobile", true),
            ("degree", true),
            ("skills", true),
            ("languages", true),
            ("father_name", true),
            ("mother_name", true),
            ("country", true),
            ("state", true),
            ("city", true),
            ("address", true),
            ("pincode", true),
            ("image", true),
        ],
    ),
    (
        "projects",
        &[
            ("id", false),
            ("name", true),
            ("description", true),
            ("head_id", false),
            ("completion_date", true),
            ("status", true),
        ],
    ),
    ("project_members", &[("project_id", true), ("staff_id", true)]),
];

/// Schema verification failures.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("table `{table}` has no column `{column}`; the database file predates this schema")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("column `{table}.{column}` allows NULL; the database file predates this schema")]
    NullableColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Confirm every table has the expected columns and nullability.
///
/// Run after [`crate::run_migrations`]. The first mismatch found is returned.
pub async fn verify_schema(pool: &SqlitePool) -> Result<(), SchemaError> {
    for &(table, columns) in EXPECTED {
        let actual: Vec<(String, bool)> =
            sqlx::query_as("SELECT name, \"notnull\" FROM pragma_table_info(?)")
                .bind(table)
                .fetch_all(pool)
                .await?;

        for &(column, required) in columns {
            match actual.iter().find(|(name, _)| name == column) {
                None => return Err(SchemaError::MissingColumn { table, column }),
                Some((_, not_null)) if required && !not_null => {
                    return Err(SchemaError::NullableColumn { table, column })
                }
                Some(_) => {}
            }
        }
    }

    tracing::debug!("Database schema verified");
    Ok(())
}
