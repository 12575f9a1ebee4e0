//! Shared trait catalogs (enchantments, alchemical properties) and the
//! link tuples that attach them to canonical entries and player items.
//!
//! A link on the canonical side describes what an in-game item inherently
//! carries. A link on the item side additionally records *who* put it
//! there: `added_automatically = true` marks links derived from a
//! canonical match, `false` marks links the player entered directly.
//! That tag is load-bearing -- reconciliation must never remove a
//! player-entered link, and must never let a derived link outlive the
//! match that justified it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{MagicSchool, StrengthUnit};
use crate::ids::{AlchemicalPropertyId, EnchantmentId};

/// Canonical alchemical links rank a property's position in the
/// ingredient's effect ordering; ranks run 1 through this bound and are
/// unique per entry.
pub const MAX_ALCHEMICAL_PRIORITY: u8 = 4;

// ---------------------------------------------------------------------------
// Trait catalog records
// ---------------------------------------------------------------------------

/// One enchantment in the shared enchantment catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Enchantment {
    /// Catalog identifier.
    pub id: EnchantmentId,
    /// Display name, e.g. "Fortify Carry Weight".
    pub name: String,
    /// The school the enchantment belongs to, when the game assigns one.
    pub school: Option<MagicSchool>,
    /// The unit strength values are expressed in, when the enchantment
    /// has a magnitude at all.
    pub strength_unit: Option<StrengthUnit>,
}

/// One alchemical property in the shared alchemy catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AlchemicalProperty {
    /// Catalog identifier.
    pub id: AlchemicalPropertyId,
    /// Display name, e.g. "Restore Health".
    pub name: String,
    /// Effect description shown in-game.
    pub description: Option<String>,
    /// The unit strength values are expressed in, when the property has
    /// a magnitude at all.
    pub strength_unit: Option<StrengthUnit>,
}

// ---------------------------------------------------------------------------
// Canonical-side links
// ---------------------------------------------------------------------------

/// An enchantment inherently carried by a canonical catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalEnchantmentLink {
    /// The enchantment being carried.
    pub enchantment_id: EnchantmentId,
    /// Magnitude in the enchantment's [`StrengthUnit`]. `None` means the
    /// enchantment has no magnitude (e.g. Waterbreathing), and matches
    /// only `None`.
    #[ts(as = "Option<String>")]
    pub strength: Option<Decimal>,
}

/// An alchemical property inherently carried by a canonical ingredient
/// or potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CanonicalAlchemicalLink {
    /// The property being carried.
    pub property_id: AlchemicalPropertyId,
    /// Magnitude in the property's [`StrengthUnit`]. `None` matches only
    /// `None`.
    #[ts(as = "Option<String>")]
    pub strength: Option<Decimal>,
    /// Effect duration in seconds. `None` matches only `None`.
    #[ts(as = "Option<String>")]
    pub duration: Option<Decimal>,
    /// Position in the entry's effect ordering, 1 through
    /// [`MAX_ALCHEMICAL_PRIORITY`], unique per canonical entry.
    pub priority: u8,
}

// ---------------------------------------------------------------------------
// Item-side links
// ---------------------------------------------------------------------------

/// An enchantment attached to a player-owned item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ItemEnchantmentLink {
    /// The attached enchantment.
    pub enchantment_id: EnchantmentId,
    /// Magnitude in the enchantment's [`StrengthUnit`].
    #[ts(as = "Option<String>")]
    pub strength: Option<Decimal>,
    /// `true` if reconciliation derived this link from a canonical match;
    /// `false` if the player entered it.
    pub added_automatically: bool,
}

impl ItemEnchantmentLink {
    /// A link derived from a canonical entry's inherent set.
    pub const fn derived(enchantment_id: EnchantmentId, strength: Option<Decimal>) -> Self {
        Self {
            enchantment_id,
            strength,
            added_automatically: true,
        }
    }

    /// A link the player entered directly.
    pub const fn player(enchantment_id: EnchantmentId, strength: Option<Decimal>) -> Self {
        Self {
            enchantment_id,
            strength,
            added_automatically: false,
        }
    }
}

/// An alchemical property attached to a player-owned ingredient or potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ItemAlchemicalLink {
    /// The attached property.
    pub property_id: AlchemicalPropertyId,
    /// Magnitude in the property's [`StrengthUnit`].
    #[ts(as = "Option<String>")]
    pub strength: Option<Decimal>,
    /// Effect duration in seconds.
    #[ts(as = "Option<String>")]
    pub duration: Option<Decimal>,
    /// `true` if reconciliation derived this link from a canonical match;
    /// `false` if the player entered it.
    pub added_automatically: bool,
}

impl ItemAlchemicalLink {
    /// A link derived from a canonical entry's inherent set.
    pub const fn derived(
        property_id: AlchemicalPropertyId,
        strength: Option<Decimal>,
        duration: Option<Decimal>,
    ) -> Self {
        Self {
            property_id,
            strength,
            duration,
            added_automatically: true,
        }
    }

    /// A link the player entered directly.
    pub const fn player(
        property_id: AlchemicalPropertyId,
        strength: Option<Decimal>,
        duration: Option<Decimal>,
    ) -> Self {
        Self {
            property_id,
            strength,
            duration,
            added_automatically: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn derived_and_player_constructors_set_the_tag() {
        let id = EnchantmentId::new();
        assert!(ItemEnchantmentLink::derived(id, Some(dec!(10))).added_automatically);
        assert!(!ItemEnchantmentLink::player(id, Some(dec!(10))).added_automatically);
    }

    #[test]
    fn link_roundtrip_serde() {
        let link = ItemAlchemicalLink::player(
            AlchemicalPropertyId::new(),
            Some(dec!(3.5)),
            None,
        );
        let json = serde_json::to_string(&link).ok();
        assert!(json.is_some());
        let back: Result<ItemAlchemicalLink, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(back.ok(), Some(link));
    }
}
