//! Canonical catalog storage.
//!
//! The catalog is reference data: written once per release by the
//! seeding tool (which imports UESP-derived exports), read on every
//! reconciliation, never edited by players. Entries are stored as one
//! JSONB document per entry alongside the columns the engine queries
//! by, following the document-column pattern used for event payloads
//! elsewhere in the stack.
//!
//! # Table Schema
//!
//! | Column | Type | Notes |
//! |--------|------|-------|
//! | `category` | `TEXT` | [`Category::as_str`] tag |
//! | `entry_key` | `JSONB` | natural key (item code, or name+hold) |
//! | `unique_item` | `BOOLEAN` | denormalized for inspection queries |
//! | `data` | `JSONB` | the full canonical entry document |
//!
//! Primary key: `(category, entry_key)`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use skyhoard_types::{AlchemicalProperty, Category, Enchantment};
use sqlx::PgConnection;

use crate::error::DbError;

/// Insert or update one canonical entry.
///
/// This is the surface the out-of-tree seeding tool writes through; the
/// application itself only reads.
///
/// # Errors
///
/// Returns [`DbError::Serialization`] if the key or entry cannot be
/// serialized, or [`DbError::Postgres`] if the upsert fails.
pub async fn upsert_entry<K, C>(
    conn: &mut PgConnection,
    category: Category,
    key: &K,
    unique_item: bool,
    entry: &C,
) -> Result<(), DbError>
where
    K: Serialize,
    C: Serialize,
{
    let key_json = serde_json::to_value(key)?;
    let data = serde_json::to_value(entry)?;

    sqlx::query(
        r"INSERT INTO canonical_entries (category, entry_key, unique_item, data)
          VALUES ($1, $2, $3, $4)
          ON CONFLICT (category, entry_key)
          DO UPDATE SET unique_item = EXCLUDED.unique_item, data = EXCLUDED.data",
    )
    .bind(category.as_str())
    .bind(&key_json)
    .bind(unique_item)
    .bind(&data)
    .execute(conn)
    .await?;

    Ok(())
}

/// Fetch every canonical entry in a category.
///
/// The collections are small (a few hundred entries each), so the
/// engine always works against the full set.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] if the query fails, or
/// [`DbError::Serialization`] if a stored document no longer matches
/// the entry type.
pub async fn fetch_category<C>(
    conn: &mut PgConnection,
    category: Category,
) -> Result<Vec<C>, DbError>
where
    C: DeserializeOwned,
{
    let documents: Vec<serde_json::Value> = sqlx::query_scalar(
        r"SELECT data FROM canonical_entries
          WHERE category = $1
          ORDER BY entry_key",
    )
    .bind(category.as_str())
    .fetch_all(conn)
    .await?;

    documents
        .into_iter()
        .map(|doc| serde_json::from_value(doc).map_err(DbError::Serialization))
        .collect()
}

// =========================================================================
// Shared trait catalogs
// =========================================================================

/// Insert or update one enchantment in the shared enchantment catalog.
///
/// # Errors
///
/// Returns [`DbError::Serialization`] or [`DbError::Postgres`] on
/// failure.
pub async fn upsert_enchantment(
    conn: &mut PgConnection,
    enchantment: &Enchantment,
) -> Result<(), DbError> {
    let data = serde_json::to_value(enchantment)?;
    sqlx::query(
        r"INSERT INTO enchantments (id, data) VALUES ($1, $2)
          ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data",
    )
    .bind(enchantment.id.into_inner())
    .bind(&data)
    .execute(conn)
    .await?;
    Ok(())
}

/// Fetch the full enchantment catalog.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] or [`DbError::Serialization`] on
/// failure.
pub async fn fetch_enchantments(conn: &mut PgConnection) -> Result<Vec<Enchantment>, DbError> {
    let documents: Vec<serde_json::Value> =
        sqlx::query_scalar(r"SELECT data FROM enchantments ORDER BY id")
            .fetch_all(conn)
            .await?;
    documents
        .into_iter()
        .map(|doc| serde_json::from_value(doc).map_err(DbError::Serialization))
        .collect()
}

/// Insert or update one alchemical property in the shared alchemy
/// catalog.
///
/// # Errors
///
/// Returns [`DbError::Serialization`] or [`DbError::Postgres`] on
/// failure.
pub async fn upsert_alchemical_property(
    conn: &mut PgConnection,
    property: &AlchemicalProperty,
) -> Result<(), DbError> {
    let data = serde_json::to_value(property)?;
    sqlx::query(
        r"INSERT INTO alchemical_properties (id, data) VALUES ($1, $2)
          ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data",
    )
    .bind(property.id.into_inner())
    .bind(&data)
    .execute(conn)
    .await?;
    Ok(())
}

/// Fetch the full alchemical-property catalog.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] or [`DbError::Serialization`] on
/// failure.
pub async fn fetch_alchemical_properties(
    conn: &mut PgConnection,
) -> Result<Vec<AlchemicalProperty>, DbError> {
    let documents: Vec<serde_json::Value> =
        sqlx::query_scalar(r"SELECT data FROM alchemical_properties ORDER BY id")
            .fetch_all(conn)
            .await?;
    documents
        .into_iter()
        .map(|doc| serde_json::from_value(doc).map_err(DbError::Serialization))
        .collect()
}
