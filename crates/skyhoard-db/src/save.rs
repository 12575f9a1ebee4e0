//! The save pipeline: the persistence boundary's contract with the
//! reconciliation engine.
//!
//! Every save attempt runs load -> resolve -> write inside a single
//! transaction:
//!
//! ```text
//! BEGIN
//!   |
//!   +-- fetch_category()        --> canonical entries
//!   +-- sibling_claims()        --> uniqueness-guard input
//!   +-- engine resolve          (pure, in memory)
//!   +-- upsert_item_row()       --> corrected scalars + reference
//!   +-- replace_*_links()       --> post-resolution link rows
//!   |
//! COMMIT
//! ```
//!
//! A validation failure (no canonical match, duplicate unique item)
//! aborts before any write; a write failure rolls the transaction back.
//! Either way no partial trait-link state is ever committed. Races
//! between two simultaneous claims of one unique entry resolve by
//! whichever commit lands first; the loser's next save re-reads the
//! sibling claims and fails cleanly.

use serde::Serialize;
use serde::de::DeserializeOwned;
use skyhoard_engine::error::ReconcileError;
use skyhoard_engine::reconcile::{Alchemical, Enchanted, Reconcilable};
use skyhoard_engine::resolve::{
    LinkDiff, Resolution, resolve, resolve_alchemical, resolve_enchanted,
};
use skyhoard_types::{ItemAlchemicalLink, ItemEnchantmentLink};
use sqlx::PgPool;

use crate::error::DbError;
use crate::{catalog_store, item_store};

/// Errors that can occur while saving a record.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// Reconciliation rejected the record; nothing was written.
    #[error("validation failed: {0}")]
    Validation(#[from] ReconcileError),

    /// A database operation failed; the transaction rolled back.
    #[error(transparent)]
    Db(#[from] DbError),
}

fn serialized_ref<T: Reconcilable>(item: &T) -> Result<Option<serde_json::Value>, DbError>
where
    T::Key: Serialize,
{
    item.canonical_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(DbError::Serialization)
}

/// Save a record in a category without trait links (books, staves, misc
/// items, properties).
///
/// Returns the full [`Resolution`] so the caller can surface the
/// outcome; `resolution.item` is what was persisted.
///
/// # Errors
///
/// Returns [`SaveError::Validation`] if reconciliation rejected the
/// record, or [`SaveError::Db`] if persistence failed.
pub async fn save_item<T>(pool: &PgPool, item: &T) -> Result<Resolution<T, ()>, SaveError>
where
    T: Reconcilable + Serialize,
    T::Canonical: DeserializeOwned,
    T::Key: Serialize + DeserializeOwned,
{
    let mut tx = pool.begin().await.map_err(DbError::Postgres)?;

    let catalog: Vec<T::Canonical> =
        catalog_store::fetch_category(&mut tx, T::CATEGORY).await?;
    let claims =
        item_store::sibling_claims::<T::Key>(&mut tx, item.game_id(), T::CATEGORY).await?;

    let resolution = resolve(item, &catalog, &claims)?;

    let data = item_store::scalar_document(&resolution.item, None)?;
    let canonical_ref = serialized_ref(&resolution.item)?;
    item_store::upsert_item_row(
        &mut tx,
        item.id(),
        item.game_id(),
        T::CATEGORY,
        canonical_ref.as_ref(),
        &data,
    )
    .await?;

    tx.commit().await.map_err(DbError::Postgres)?;

    tracing::debug!(
        category = T::CATEGORY.as_str(),
        item = %item.id(),
        matched = resolution.outcome.is_matched(),
        "persisted reconciled record"
    );

    Ok(resolution)
}

/// Save a record in an enchantable category (armor, weapons, clothing,
/// jewelry), rewriting its enchantment-link rows to the post-resolution
/// state.
///
/// # Errors
///
/// Returns [`SaveError::Validation`] if reconciliation rejected the
/// record, or [`SaveError::Db`] if persistence failed.
pub async fn save_enchanted_item<T>(
    pool: &PgPool,
    item: &T,
) -> Result<Resolution<T, LinkDiff<ItemEnchantmentLink>>, SaveError>
where
    T: Enchanted + Serialize,
    T::Canonical: DeserializeOwned,
    T::Key: Serialize + DeserializeOwned,
{
    let mut tx = pool.begin().await.map_err(DbError::Postgres)?;

    let catalog: Vec<T::Canonical> =
        catalog_store::fetch_category(&mut tx, T::CATEGORY).await?;
    let claims =
        item_store::sibling_claims::<T::Key>(&mut tx, item.game_id(), T::CATEGORY).await?;

    let resolution = resolve_enchanted(item, &catalog, &claims)?;

    let data = item_store::scalar_document(&resolution.item, Some(item_store::ENCHANTMENTS_FIELD))?;
    let canonical_ref = serialized_ref(&resolution.item)?;
    item_store::upsert_item_row(
        &mut tx,
        item.id(),
        item.game_id(),
        T::CATEGORY,
        canonical_ref.as_ref(),
        &data,
    )
    .await?;
    item_store::replace_enchantment_links(&mut tx, item.id(), resolution.item.enchantments())
        .await?;

    tx.commit().await.map_err(DbError::Postgres)?;

    tracing::debug!(
        category = T::CATEGORY.as_str(),
        item = %item.id(),
        matched = resolution.outcome.is_matched(),
        links_added = resolution.diff.add.len(),
        links_removed = resolution.diff.remove.len(),
        "persisted reconciled record"
    );

    Ok(resolution)
}

/// Save an ingredient or potion record, rewriting its alchemical-link
/// rows to the post-resolution state.
///
/// # Errors
///
/// Returns [`SaveError::Validation`] if reconciliation rejected the
/// record, or [`SaveError::Db`] if persistence failed.
pub async fn save_alchemical_item<T>(
    pool: &PgPool,
    item: &T,
) -> Result<Resolution<T, LinkDiff<ItemAlchemicalLink>>, SaveError>
where
    T: Alchemical + Serialize,
    T::Canonical: DeserializeOwned,
    T::Key: Serialize + DeserializeOwned,
{
    let mut tx = pool.begin().await.map_err(DbError::Postgres)?;

    let catalog: Vec<T::Canonical> =
        catalog_store::fetch_category(&mut tx, T::CATEGORY).await?;
    let claims =
        item_store::sibling_claims::<T::Key>(&mut tx, item.game_id(), T::CATEGORY).await?;

    let resolution = resolve_alchemical(item, &catalog, &claims)?;

    let data = item_store::scalar_document(&resolution.item, Some(item_store::ALCHEMY_FIELD))?;
    let canonical_ref = serialized_ref(&resolution.item)?;
    item_store::upsert_item_row(
        &mut tx,
        item.id(),
        item.game_id(),
        T::CATEGORY,
        canonical_ref.as_ref(),
        &data,
    )
    .await?;
    item_store::replace_alchemical_links(
        &mut tx,
        item.id(),
        resolution.item.alchemical_properties(),
    )
    .await?;

    tx.commit().await.map_err(DbError::Postgres)?;

    tracing::debug!(
        category = T::CATEGORY.as_str(),
        item = %item.id(),
        matched = resolution.outcome.is_matched(),
        links_added = resolution.diff.add.len(),
        links_removed = resolution.diff.remove.len(),
        "persisted reconciled record"
    );

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use skyhoard_types::Category;

    use super::*;

    #[test]
    fn validation_failures_keep_the_engine_message() {
        let err = SaveError::Validation(ReconcileError::NoCanonicalMatch {
            noun: Category::Potion.noun(),
        });
        assert_eq!(
            err.to_string(),
            "validation failed: doesn't match a potion that exists in Skyrim"
        );
    }

    #[test]
    fn db_failures_pass_through() {
        let err = SaveError::Db(DbError::NotFound(String::from("item 42")));
        assert!(err.to_string().contains("item 42"));
    }
}
