//! Player-owned records: the mutable items being reconciled against the
//! canonical catalog.
//!
//! Every struct here mirrors its canonical counterpart with each scalar
//! wrapped in `Option` -- a player may log "some steel armor, weighs 20"
//! long before knowing exactly which piece it is. Reconciliation fills
//! the gaps once the record narrows to a single canonical entry, and
//! records that entry's natural key in `canonical_code` /
//! `canonical_key`.
//!
//! `quantity` and `notes` are bookkeeping for the shopping-list side of
//! the tracker; they never participate in matching and reconciliation
//! never touches them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    BodySlot, BookType, Hold, JewelryType, MagicSchool, WeaponCategory, WeaponType, WeightClass,
};
use crate::ids::{GameId, ItemCode, ItemId, PropertyKey};
use crate::traits::{ItemAlchemicalLink, ItemEnchantmentLink};

// ---------------------------------------------------------------------------
// Ownership scope
// ---------------------------------------------------------------------------

/// One playthrough. All player items belong to exactly one game, and the
/// unique-item guard operates within a single game's records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Game {
    /// Game identifier.
    pub id: GameId,
    /// Player-chosen name ("Dunmer thief run").
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create a game with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GameId::new(),
            name: name.into(),
            description: None,
            created_at: Utc::now(),
        }
    }
}

/// Generates the shared constructor for an item struct whose optional
/// fields all start unset.
macro_rules! item_new {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $name {
            /// Create an empty record owned by the given game. All
            /// matchable fields start unset.
            pub fn new(game_id: GameId) -> Self {
                let now = Utc::now();
                Self {
                    id: ItemId::new(),
                    game_id,
                    quantity: 1,
                    notes: None,
                    canonical_code: None,
                    created_at: now,
                    updated_at: now,
                    $($field: Default::default(),)*
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Enchantable categories
// ---------------------------------------------------------------------------

/// A player-owned armor piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Armor {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// Light or heavy, if known.
    pub weight_class: Option<WeightClass>,
    /// Body slot, if known.
    pub body_slot: Option<BodySlot>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// Magical-effects text, if known.
    pub magical_effects: Option<String>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// Attached enchantments (derived and player-entered).
    pub enchantments: Vec<ItemEnchantmentLink>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(Armor {
    name,
    weight_class,
    body_slot,
    unit_weight,
    magical_effects,
    enchantments,
});

/// A player-owned weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Weapon {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// Handedness class, if known.
    pub category: Option<WeaponCategory>,
    /// Specific weapon shape, if known.
    pub weapon_type: Option<WeaponType>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// Magical-effects text, if known.
    pub magical_effects: Option<String>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// Attached enchantments (derived and player-entered).
    pub enchantments: Vec<ItemEnchantmentLink>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(Weapon {
    name,
    category,
    weapon_type,
    unit_weight,
    magical_effects,
    enchantments,
});

/// A player-owned clothing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClothingItem {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// Body slot, if known.
    pub body_slot: Option<BodySlot>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// Magical-effects text, if known.
    pub magical_effects: Option<String>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// Attached enchantments (derived and player-entered).
    pub enchantments: Vec<ItemEnchantmentLink>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(ClothingItem {
    name,
    body_slot,
    unit_weight,
    magical_effects,
    enchantments,
});

/// A player-owned jewelry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct JewelryItem {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// Ring, circlet, or amulet, if known.
    pub jewelry_type: Option<JewelryType>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// Magical-effects text, if known.
    pub magical_effects: Option<String>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// Attached enchantments (derived and player-entered).
    pub enchantments: Vec<ItemEnchantmentLink>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(JewelryItem {
    name,
    jewelry_type,
    unit_weight,
    magical_effects,
    enchantments,
});

// ---------------------------------------------------------------------------
// Alchemical categories
// ---------------------------------------------------------------------------

/// A player-owned alchemy ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Ingredient {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// Attached alchemical properties (derived and player-entered).
    pub alchemical_properties: Vec<ItemAlchemicalLink>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(Ingredient {
    name,
    unit_weight,
    alchemical_properties,
});

/// A player-owned potion or poison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Potion {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// Magical-effects text, if known.
    pub magical_effects: Option<String>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// Attached alchemical properties (derived and player-entered).
    pub alchemical_properties: Vec<ItemAlchemicalLink>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(Potion {
    name,
    unit_weight,
    magical_effects,
    alchemical_properties,
});

// ---------------------------------------------------------------------------
// Plain categories
// ---------------------------------------------------------------------------

/// A player-owned book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Book {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Title, if known. Matched against canonical titles and their
    /// published variants.
    pub title: Option<String>,
    /// Author line, if known.
    pub authors: Option<String>,
    /// Kind of readable, if known.
    pub book_type: Option<BookType>,
    /// For skill books, the skill raised.
    pub skill_name: Option<String>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(Book {
    title,
    authors,
    book_type,
    skill_name,
    unit_weight,
});

/// A player-owned staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Staff {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// School of the staff's effect, if known.
    pub school: Option<MagicSchool>,
    /// Base damage, if known.
    #[ts(as = "Option<String>")]
    pub base_damage: Option<Decimal>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// Magical-effects text, if known.
    pub magical_effects: Option<String>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(Staff {
    name,
    school,
    base_damage,
    unit_weight,
    magical_effects,
});

/// A player-owned miscellaneous item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MiscItem {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Display name, if known.
    pub name: Option<String>,
    /// Loose kind tag, if known.
    pub item_type: Option<String>,
    /// Weight of a single unit, if known.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_code: Option<ItemCode>,
    /// How many the player holds.
    pub quantity: u32,
    /// Free-form shopping-list notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

item_new!(MiscItem { name, item_type, unit_weight });

/// A player-owned homestead record.
///
/// The amenity booleans are player state (what has actually been built
/// this playthrough), distinct from the canonical `*_available` flags
/// describing what the property supports. Reconciliation never touches
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Property {
    /// Record identifier.
    pub id: ItemId,
    /// Owning game.
    pub game_id: GameId,
    /// Property name, if known.
    pub name: Option<String>,
    /// Hold, if known.
    pub hold: Option<Hold>,
    /// City, if known.
    pub city: Option<String>,
    /// The resolved canonical entry, when reconciliation found exactly one.
    pub canonical_key: Option<PropertyKey>,
    /// `true` once the player has built the alchemy lab.
    pub alchemy_lab_built: bool,
    /// `true` once the player has built the arcane enchanter.
    pub arcane_enchanter_built: bool,
    /// `true` once the player has built the forge.
    pub forge_built: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create an empty record owned by the given game.
    pub fn new(game_id: GameId) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            game_id,
            name: None,
            hold: None,
            city: None,
            canonical_key: None,
            alchemy_lab_built: false,
            arcane_enchanter_built: false,
            forge_built: false,
            created_at: now,
            updated_at: now,
        }
    }
}
