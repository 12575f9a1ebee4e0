//! Player record storage: item rows, their trait-link rows, and the
//! sibling-claim query feeding the uniqueness guard.
//!
//! Category-specific scalars live in one JSONB document per item (the
//! same document-column pattern as the catalog); trait links are
//! normalized into their own table so the engine's link diffs map onto
//! row-level writes inside the save transaction.
//!
//! # Table Schemas
//!
//! `items`:
//!
//! | Column | Type | Notes |
//! |--------|------|-------|
//! | `id` | `UUID` | primary key |
//! | `game_id` | `UUID` | owning game, FK |
//! | `category` | `TEXT` | [`Category::as_str`] tag |
//! | `canonical_ref` | `JSONB NULL` | resolved natural key, for claims |
//! | `data` | `JSONB` | record document, links stripped |
//!
//! `item_trait_links`:
//!
//! | Column | Type |
//! |--------|------|
//! | `id` | `BIGSERIAL` primary key |
//! | `item_id` | `UUID` FK |
//! | `link_kind` | `TEXT` (`enchantment` / `alchemical`) |
//! | `trait_id` | `UUID` |
//! | `strength` | `NUMERIC NULL` |
//! | `duration` | `NUMERIC NULL` |
//! | `added_automatically` | `BOOLEAN` |

use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use skyhoard_engine::SiblingClaim;
use skyhoard_types::{
    AlchemicalPropertyId, Category, EnchantmentId, Game, GameId, ItemAlchemicalLink,
    ItemEnchantmentLink, ItemId,
};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::DbError;

/// JSON field carrying enchantment links on enchantable records.
pub const ENCHANTMENTS_FIELD: &str = "enchantments";

/// JSON field carrying alchemical links on ingredient and potion
/// records.
pub const ALCHEMY_FIELD: &str = "alchemical_properties";

/// Which trait table a link row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Enchantment,
    Alchemical,
}

impl LinkKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Enchantment => "enchantment",
            Self::Alchemical => "alchemical",
        }
    }
}

/// One trait-link row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
struct LinkRow {
    trait_id: Uuid,
    strength: Option<Decimal>,
    duration: Option<Decimal>,
    added_automatically: bool,
}

impl LinkRow {
    fn to_enchantment(&self) -> ItemEnchantmentLink {
        ItemEnchantmentLink {
            enchantment_id: EnchantmentId::from(self.trait_id),
            strength: self.strength,
            added_automatically: self.added_automatically,
        }
    }

    fn to_alchemical(&self) -> ItemAlchemicalLink {
        ItemAlchemicalLink {
            property_id: AlchemicalPropertyId::from(self.trait_id),
            strength: self.strength,
            duration: self.duration,
            added_automatically: self.added_automatically,
        }
    }
}

// =========================================================================
// Games
// =========================================================================

/// Insert or update a game row.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] if the upsert fails.
pub async fn upsert_game(conn: &mut PgConnection, game: &Game) -> Result<(), DbError> {
    sqlx::query(
        r"INSERT INTO games (id, name, description, created_at)
          VALUES ($1, $2, $3, $4)
          ON CONFLICT (id)
          DO UPDATE SET name = EXCLUDED.name, description = EXCLUDED.description",
    )
    .bind(game.id.into_inner())
    .bind(&game.name)
    .bind(&game.description)
    .bind(game.created_at)
    .execute(conn)
    .await?;
    Ok(())
}

// =========================================================================
// Item rows
// =========================================================================

/// Serialize a record to its stored JSONB document, stripping the given
/// link field (links live in `item_trait_links`, not in the document).
///
/// # Errors
///
/// Returns [`DbError::Serialization`] if the record cannot be
/// serialized.
pub fn scalar_document<T: Serialize>(
    item: &T,
    strip: Option<&str>,
) -> Result<serde_json::Value, DbError> {
    let mut value = serde_json::to_value(item)?;
    if let (Some(field), Some(map)) = (strip, value.as_object_mut()) {
        map.remove(field);
    }
    Ok(value)
}

/// Insert or update one item row.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] if the upsert fails.
pub async fn upsert_item_row(
    conn: &mut PgConnection,
    id: ItemId,
    game_id: GameId,
    category: Category,
    canonical_ref: Option<&serde_json::Value>,
    data: &serde_json::Value,
) -> Result<(), DbError> {
    sqlx::query(
        r"INSERT INTO items (id, game_id, category, canonical_ref, data, created_at, updated_at)
          VALUES ($1, $2, $3, $4, $5, now(), now())
          ON CONFLICT (id)
          DO UPDATE SET canonical_ref = EXCLUDED.canonical_ref,
                        data = EXCLUDED.data,
                        updated_at = now()",
    )
    .bind(id.into_inner())
    .bind(game_id.into_inner())
    .bind(category.as_str())
    .bind(canonical_ref)
    .bind(data)
    .execute(conn)
    .await?;
    Ok(())
}

async fn fetch_item_document(
    conn: &mut PgConnection,
    id: ItemId,
) -> Result<serde_json::Value, DbError> {
    let document: Option<serde_json::Value> =
        sqlx::query_scalar(r"SELECT data FROM items WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(conn)
            .await?;
    document.ok_or_else(|| DbError::NotFound(format!("item {id}")))
}

fn inject_links(
    mut document: serde_json::Value,
    field: &str,
    links: serde_json::Value,
) -> serde_json::Value {
    if let Some(map) = document.as_object_mut() {
        map.insert(String::from(field), links);
    }
    document
}

/// Load a record in a category without trait links.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no row exists, or
/// [`DbError::Serialization`] if the stored document no longer matches
/// the record type.
pub async fn load_item<T: DeserializeOwned>(
    conn: &mut PgConnection,
    id: ItemId,
) -> Result<T, DbError> {
    let document = fetch_item_document(conn, id).await?;
    Ok(serde_json::from_value(document)?)
}

/// Load an enchantable record, rejoining its enchantment-link rows.
///
/// # Errors
///
/// Same as [`load_item`].
pub async fn load_enchanted_item<T: DeserializeOwned>(
    conn: &mut PgConnection,
    id: ItemId,
) -> Result<T, DbError> {
    let document = fetch_item_document(&mut *conn, id).await?;
    let rows = fetch_links(conn, id, LinkKind::Enchantment).await?;
    let links: Vec<ItemEnchantmentLink> = rows.iter().map(LinkRow::to_enchantment).collect();
    let document = inject_links(document, ENCHANTMENTS_FIELD, serde_json::to_value(links)?);
    Ok(serde_json::from_value(document)?)
}

/// Load an ingredient or potion record, rejoining its alchemical-link
/// rows.
///
/// # Errors
///
/// Same as [`load_item`].
pub async fn load_alchemical_item<T: DeserializeOwned>(
    conn: &mut PgConnection,
    id: ItemId,
) -> Result<T, DbError> {
    let document = fetch_item_document(&mut *conn, id).await?;
    let rows = fetch_links(conn, id, LinkKind::Alchemical).await?;
    let links: Vec<ItemAlchemicalLink> = rows.iter().map(LinkRow::to_alchemical).collect();
    let document = inject_links(document, ALCHEMY_FIELD, serde_json::to_value(links)?);
    Ok(serde_json::from_value(document)?)
}

// =========================================================================
// Trait-link rows
// =========================================================================

async fn fetch_links(
    conn: &mut PgConnection,
    item_id: ItemId,
    kind: LinkKind,
) -> Result<Vec<LinkRow>, DbError> {
    let rows = sqlx::query_as::<_, LinkRow>(
        r"SELECT trait_id, strength, duration, added_automatically
          FROM item_trait_links
          WHERE item_id = $1 AND link_kind = $2
          ORDER BY id",
    )
    .bind(item_id.into_inner())
    .bind(kind.as_str())
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

async fn replace_links(
    conn: &mut PgConnection,
    item_id: ItemId,
    kind: LinkKind,
    trait_ids: Vec<Uuid>,
    strengths: Vec<Option<Decimal>>,
    durations: Vec<Option<Decimal>>,
    autos: Vec<bool>,
) -> Result<(), DbError> {
    sqlx::query(r"DELETE FROM item_trait_links WHERE item_id = $1 AND link_kind = $2")
        .bind(item_id.into_inner())
        .bind(kind.as_str())
        .execute(&mut *conn)
        .await?;

    if trait_ids.is_empty() {
        return Ok(());
    }

    // Multi-row INSERT using UNNEST for batch efficiency.
    sqlx::query(
        r"INSERT INTO item_trait_links (item_id, link_kind, trait_id, strength, duration, added_automatically)
          SELECT $1, $2, * FROM UNNEST($3::UUID[], $4::NUMERIC[], $5::NUMERIC[], $6::BOOLEAN[])",
    )
    .bind(item_id.into_inner())
    .bind(kind.as_str())
    .bind(&trait_ids)
    .bind(&strengths)
    .bind(&durations)
    .bind(&autos)
    .execute(conn)
    .await?;

    Ok(())
}

/// Rewrite an item's enchantment-link rows to match the record's
/// post-resolution link set (player-entered and derived alike), within
/// the caller's transaction.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] if a write fails.
pub async fn replace_enchantment_links(
    conn: &mut PgConnection,
    item_id: ItemId,
    links: &[ItemEnchantmentLink],
) -> Result<(), DbError> {
    let trait_ids = links.iter().map(|l| l.enchantment_id.into_inner()).collect();
    let strengths = links.iter().map(|l| l.strength).collect();
    let durations = vec![None; links.len()];
    let autos = links.iter().map(|l| l.added_automatically).collect();
    replace_links(
        conn,
        item_id,
        LinkKind::Enchantment,
        trait_ids,
        strengths,
        durations,
        autos,
    )
    .await
}

/// Rewrite an item's alchemical-link rows to match the record's
/// post-resolution link set, within the caller's transaction.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] if a write fails.
pub async fn replace_alchemical_links(
    conn: &mut PgConnection,
    item_id: ItemId,
    links: &[ItemAlchemicalLink],
) -> Result<(), DbError> {
    let trait_ids = links.iter().map(|l| l.property_id.into_inner()).collect();
    let strengths = links.iter().map(|l| l.strength).collect();
    let durations = links.iter().map(|l| l.duration).collect();
    let autos = links.iter().map(|l| l.added_automatically).collect();
    replace_links(
        conn,
        item_id,
        LinkKind::Alchemical,
        trait_ids,
        strengths,
        durations,
        autos,
    )
    .await
}

// =========================================================================
// Sibling claims
// =========================================================================

/// Fetch every canonical claim held by records of one category in one
/// game, for the uniqueness guard. The engine ignores the saving
/// record's own claim, so no exclusion happens here.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] if the query fails, or
/// [`DbError::Serialization`] if a stored key no longer matches the
/// category's key type.
pub async fn sibling_claims<K: DeserializeOwned>(
    conn: &mut PgConnection,
    game_id: GameId,
    category: Category,
) -> Result<Vec<SiblingClaim<K>>, DbError> {
    let rows: Vec<(Uuid, serde_json::Value)> = sqlx::query_as(
        r"SELECT id, canonical_ref FROM items
          WHERE game_id = $1 AND category = $2 AND canonical_ref IS NOT NULL",
    )
    .bind(game_id.into_inner())
    .bind(category.as_str())
    .fetch_all(conn)
    .await?;

    rows.into_iter()
        .map(|(id, key)| {
            let key = serde_json::from_value(key).map_err(DbError::Serialization)?;
            Ok(SiblingClaim::new(ItemId::from(id), key))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use skyhoard_types::Armor;

    use super::*;

    #[test]
    fn scalar_document_strips_the_link_field() {
        let mut armor = Armor::new(GameId::new());
        armor.enchantments = vec![ItemEnchantmentLink::player(
            EnchantmentId::new(),
            Some(dec!(10)),
        )];
        let document = scalar_document(&armor, Some(ENCHANTMENTS_FIELD)).ok();
        let has_links = document
            .as_ref()
            .and_then(|d| d.get(ENCHANTMENTS_FIELD))
            .is_some();
        assert!(!has_links);
        // Scalars survive the strip.
        assert!(document.as_ref().and_then(|d| d.get("game_id")).is_some());
    }

    #[test]
    fn injected_links_deserialize_back_into_the_record() {
        let armor = Armor::new(GameId::new());
        let document = scalar_document(&armor, Some(ENCHANTMENTS_FIELD)).ok();
        let links = vec![ItemEnchantmentLink::derived(
            EnchantmentId::new(),
            Some(dec!(25)),
        )];
        let links_json = serde_json::to_value(&links).ok();
        let rejoined = document.zip(links_json).map(|(d, l)| {
            inject_links(d, ENCHANTMENTS_FIELD, l)
        });
        let restored: Option<Armor> =
            rejoined.and_then(|d| serde_json::from_value(d).ok());
        assert_eq!(restored.map(|a| a.enchantments), Some(links));
    }

    #[test]
    fn link_rows_convert_to_both_link_kinds() {
        let row = LinkRow {
            trait_id: Uuid::now_v7(),
            strength: Some(dec!(4)),
            duration: Some(dec!(60)),
            added_automatically: true,
        };
        let enchantment = row.to_enchantment();
        assert_eq!(enchantment.strength, Some(dec!(4)));
        assert!(enchantment.added_automatically);
        let alchemical = row.to_alchemical();
        assert_eq!(alchemical.duration, Some(dec!(60)));
    }
}
