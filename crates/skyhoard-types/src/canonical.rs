//! Canonical catalog entries: the authoritative description of how each
//! item actually exists in Skyrim.
//!
//! One collection per category, populated by the out-of-tree seeding tool
//! from UESP-derived exports and read-only from the application's
//! perspective. Player records are reconciled against these entries; when
//! a record resolves to exactly one entry, the entry's field values
//! overwrite the player-supplied ones.
//!
//! Scalar fields are independently nullable: game data genuinely omits
//! some attributes (an unplayable quest item may have no weight class).
//! A null canonical field is a real absence -- an item claiming a value
//! for it will not match the entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    BodySlot, BookType, Hold, JewelryType, MagicSchool, WeaponCategory, WeaponType, WeightClass,
};
use crate::ids::{ItemCode, PropertyKey};
use crate::traits::{CanonicalAlchemicalLink, CanonicalEnchantmentLink};

// ---------------------------------------------------------------------------
// Enchantable categories
// ---------------------------------------------------------------------------

/// A canonical armor piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalArmor {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// Light or heavy.
    pub weight_class: Option<WeightClass>,
    /// The body slot the piece occupies.
    pub body_slot: Option<BodySlot>,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// In-game description of magical effects.
    pub magical_effects: Option<String>,
    /// `true` if the player may add arbitrary enchantments beyond the
    /// inherent set.
    pub enchantable: bool,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
    /// `true` if the piece belongs to a quest and cannot normally be
    /// dropped.
    pub quest_item: bool,
    /// Enchantments the piece inherently carries.
    pub enchantments: Vec<CanonicalEnchantmentLink>,
}

/// A canonical weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalWeapon {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// Handedness class.
    pub category: Option<WeaponCategory>,
    /// Specific weapon shape.
    pub weapon_type: Option<WeaponType>,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// In-game description of magical effects.
    pub magical_effects: Option<String>,
    /// `true` if the player may add arbitrary enchantments beyond the
    /// inherent set.
    pub enchantable: bool,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
    /// `true` if the weapon belongs to a quest.
    pub quest_item: bool,
    /// Enchantments the weapon inherently carries.
    pub enchantments: Vec<CanonicalEnchantmentLink>,
}

/// A canonical clothing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalClothingItem {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// The body slot the garment occupies.
    pub body_slot: Option<BodySlot>,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// In-game description of magical effects.
    pub magical_effects: Option<String>,
    /// `true` if the player may add arbitrary enchantments beyond the
    /// inherent set.
    pub enchantable: bool,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
    /// Enchantments the garment inherently carries.
    pub enchantments: Vec<CanonicalEnchantmentLink>,
}

/// A canonical jewelry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalJewelryItem {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// Ring, circlet, or amulet.
    pub jewelry_type: Option<JewelryType>,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// In-game description of magical effects.
    pub magical_effects: Option<String>,
    /// `true` if the player may add arbitrary enchantments beyond the
    /// inherent set.
    pub enchantable: bool,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
    /// Enchantments the piece inherently carries.
    pub enchantments: Vec<CanonicalEnchantmentLink>,
}

// ---------------------------------------------------------------------------
// Alchemical categories
// ---------------------------------------------------------------------------

/// A canonical alchemy ingredient.
///
/// Every ingredient carries up to four alchemical properties, ranked by
/// discovery order (the `priority` on each link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalIngredient {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// `true` if apothecaries stock the ingredient.
    pub purchasable: bool,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
    /// The ingredient's alchemical properties, priority-ranked.
    pub alchemical_properties: Vec<CanonicalAlchemicalLink>,
}

/// A canonical potion or poison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalPotion {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// In-game description of effects.
    pub magical_effects: Option<String>,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
    /// The potion's alchemical properties.
    pub alchemical_properties: Vec<CanonicalAlchemicalLink>,
}

// ---------------------------------------------------------------------------
// Plain categories
// ---------------------------------------------------------------------------

/// A canonical book.
///
/// Titles are matched against the primary `title` and against every entry
/// of `title_variants`, since the game publishes several volumes under
/// inconsistent names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalBook {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Primary title.
    pub title: String,
    /// Alternate titles the same book appears under.
    pub title_variants: Vec<String>,
    /// Author line, when the book credits one.
    pub authors: Option<String>,
    /// What kind of readable this is.
    pub book_type: Option<BookType>,
    /// For skill books, the skill the book raises.
    pub skill_name: Option<String>,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
}

/// A canonical staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalStaff {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// The school of the staff's effect.
    pub school: Option<MagicSchool>,
    /// Base damage for offensive staves.
    #[ts(as = "Option<String>")]
    pub base_damage: Option<Decimal>,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// In-game description of magical effects.
    pub magical_effects: Option<String>,
    /// `true` for Daedric artifacts (Wabbajack, Sanguine Rose, ...).
    pub daedric_artifact: bool,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
}

/// A canonical miscellaneous item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalMiscItem {
    /// In-game item code (natural key).
    pub code: ItemCode,
    /// Display name.
    pub name: String,
    /// Loose kind tag ("tool", "clutter", "dragon claw", ...).
    pub item_type: Option<String>,
    /// Weight of a single unit, in game units.
    #[ts(as = "Option<String>")]
    pub unit_weight: Option<Decimal>,
    /// `true` if at most one instance exists per game.
    pub unique_item: bool,
}

/// A canonical homestead.
///
/// Properties are one-per-game by nature: a playthrough owns Breezehome
/// or it does not. The reconciliation uniqueness guard therefore treats
/// every property as a unique item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalProperty {
    /// Property name (key part).
    pub name: String,
    /// The hold the property stands in (key part).
    pub hold: Hold,
    /// The city, for properties inside one.
    pub city: Option<String>,
    /// `true` if an alchemy lab can exist at the property.
    pub alchemy_lab_available: bool,
    /// `true` if an arcane enchanter can exist at the property.
    pub arcane_enchanter_available: bool,
    /// `true` if a forge can exist at the property.
    pub forge_available: bool,
}

impl CanonicalProperty {
    /// The entry's natural key.
    pub fn key(&self) -> PropertyKey {
        PropertyKey {
            name: self.name.clone(),
            hold: self.hold,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn canonical_armor_roundtrip_serde() {
        let armor = CanonicalArmor {
            code: ItemCode::new("000139B8"),
            name: String::from("Daedric Armor"),
            weight_class: Some(WeightClass::HeavyArmor),
            body_slot: Some(BodySlot::Body),
            unit_weight: Some(dec!(50)),
            magical_effects: None,
            enchantable: true,
            unique_item: false,
            quest_item: false,
            enchantments: Vec::new(),
        };
        let json = serde_json::to_string(&armor).ok();
        assert!(json.is_some());
        let back: Result<CanonicalArmor, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(back.ok(), Some(armor));
    }

    #[test]
    fn property_key_copies_name_and_hold() {
        let property = CanonicalProperty {
            name: String::from("Breezehome"),
            hold: Hold::Whiterun,
            city: Some(String::from("Whiterun")),
            alchemy_lab_available: true,
            arcane_enchanter_available: false,
            forge_available: false,
        };
        let key = property.key();
        assert_eq!(key.name, "Breezehome");
        assert_eq!(key.hold, Hold::Whiterun);
    }
}
