//! Type-safe identifier wrappers for Skyhoard records.
//!
//! Every mutable record (games, player items, trait-catalog rows) carries a
//! strongly-typed UUID so identifiers cannot be mixed up at compile time.
//! UUIDs are v7 (time-ordered) for efficient database indexing.
//!
//! Canonical catalog entries are keyed differently: the in-game item code
//! ([`ItemCode`]) for the nine item categories, and name plus hold
//! ([`PropertyKey`]) for homesteads. Those keys come from the catalog data
//! itself, not from the database.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::enums::Hold;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a game (one playthrough, the ownership scope
    /// for all player items).
    GameId
}

define_id! {
    /// Unique identifier for a player-owned item record in any category.
    ItemId
}

define_id! {
    /// Unique identifier for an enchantment in the shared trait catalog.
    EnchantmentId
}

define_id! {
    /// Unique identifier for an alchemical property in the shared trait
    /// catalog.
    AlchemicalPropertyId
}

/// The in-game item code identifying one canonical catalog entry.
///
/// Codes are eight-character hex identifiers as published in game data
/// exports (for example `000139B8` for Daedric Armor). Codes are stored
/// uppercase; both construction and deserialization normalize the case
/// so equality is exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(from = "String")]
#[ts(export, export_to = "bindings/")]
pub struct ItemCode(String);

impl ItemCode {
    /// Create an item code, normalizing to uppercase.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_ascii_uppercase())
    }

    /// Return the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ItemCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// The natural key for a canonical homestead: its name and the hold it
/// stands in.
///
/// Property names repeat across holds in principle, so neither field alone
/// identifies an entry. The pair is unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PropertyKey {
    /// The property name as published in the catalog (e.g. "Breezehome").
    pub name: String,
    /// The hold the property stands in.
    pub hold: Hold,
}

impl core::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.hold.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let game = GameId::new();
        let item = ItemId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(game.into_inner(), Uuid::nil());
        assert_ne!(item.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = ItemId::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<ItemId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(restored.is_ok());
    }

    #[test]
    fn item_code_normalizes_case() {
        let code = ItemCode::new("000139b8");
        assert_eq!(code.as_str(), "000139B8");
        assert_eq!(code, ItemCode::new("000139B8"));
    }

    #[test]
    fn item_code_normalizes_on_deserialization() {
        let code: Result<ItemCode, _> = serde_json::from_str("\"000139b8\"");
        assert_eq!(code.ok(), Some(ItemCode::new("000139B8")));
    }

    #[test]
    fn property_key_display_names_hold() {
        let key = PropertyKey {
            name: String::from("Breezehome"),
            hold: Hold::Whiterun,
        };
        assert_eq!(key.to_string(), "Breezehome (Whiterun)");
    }
}
