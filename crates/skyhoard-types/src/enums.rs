//! Enumeration types for the Skyhoard inventory tracker.
//!
//! Closed vocabularies from the game data: item categories, armor and
//! weapon taxonomy, jewelry and book kinds, magic schools, holds, and the
//! units enchantment or alchemical strengths are expressed in.
//!
//! Closed sets compare exactly during canonical matching; only free-text
//! fields (names, titles, effect descriptions) are compared
//! case-insensitively.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Item categories
// ---------------------------------------------------------------------------

/// The nine item categories plus homesteads, each backed by its own
/// canonical catalog collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    /// Wearable armor pieces (heavy and light).
    Armor,
    /// Weapons of all handedness classes.
    Weapon,
    /// Unarmored clothing.
    ClothingItem,
    /// Rings, circlets, and amulets.
    JewelryItem,
    /// Alchemy ingredients.
    Ingredient,
    /// Brewed potions and poisons.
    Potion,
    /// Books, journals, letters, and spell tomes.
    Book,
    /// Enchanted staves.
    Staff,
    /// Everything else: tools, clutter, quest oddities.
    MiscItem,
    /// Player-ownable homesteads.
    Property,
}

impl Category {
    /// Stable lowercase tag used for database storage and log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Weapon => "weapon",
            Self::ClothingItem => "clothing_item",
            Self::JewelryItem => "jewelry_item",
            Self::Ingredient => "ingredient",
            Self::Potion => "potion",
            Self::Book => "book",
            Self::Staff => "staff",
            Self::MiscItem => "misc_item",
            Self::Property => "property",
        }
    }

    /// The category noun, with article, as it appears in validation
    /// messages ("doesn't match an armor item that exists in Skyrim").
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Armor => "an armor item",
            Self::Weapon => "a weapon",
            Self::ClothingItem => "a clothing item",
            Self::JewelryItem => "a jewelry item",
            Self::Ingredient => "an ingredient",
            Self::Potion => "a potion",
            Self::Book => "a book",
            Self::Staff => "a staff",
            Self::MiscItem => "a miscellaneous item",
            Self::Property => "a property",
        }
    }
}

// ---------------------------------------------------------------------------
// Armor and clothing
// ---------------------------------------------------------------------------

/// The armor weight class governing which skill the piece levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum WeightClass {
    /// Light armor (leather, elven, glass lines).
    LightArmor,
    /// Heavy armor (iron, steel, daedric lines).
    HeavyArmor,
}

/// The body slot a wearable occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BodySlot {
    /// Helmets, hoods, and hats.
    Head,
    /// Cuirasses, robes, and dresses.
    Body,
    /// Gauntlets and gloves.
    Hands,
    /// Boots and shoes.
    Feet,
    /// Shields (armor only).
    Shield,
}

// ---------------------------------------------------------------------------
// Weapons
// ---------------------------------------------------------------------------

/// The handedness class of a weapon, matching the three weapon skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum WeaponCategory {
    /// Daggers, swords, war axes, maces.
    OneHanded,
    /// Greatswords, battleaxes, warhammers.
    TwoHanded,
    /// Bows, crossbows, and their ammunition.
    Archery,
}

/// The specific weapon shape within a handedness class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum WeaponType {
    /// One-handed: dagger.
    Dagger,
    /// One-handed: sword.
    Sword,
    /// One-handed: war axe.
    WarAxe,
    /// One-handed: mace.
    Mace,
    /// Two-handed: greatsword.
    Greatsword,
    /// Two-handed: battleaxe.
    Battleaxe,
    /// Two-handed: warhammer.
    Warhammer,
    /// Archery: bow.
    Bow,
    /// Archery: crossbow.
    Crossbow,
    /// Archery: arrow.
    Arrow,
    /// Archery: bolt.
    Bolt,
}

// ---------------------------------------------------------------------------
// Jewelry and books
// ---------------------------------------------------------------------------

/// The kind of jewelry piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum JewelryType {
    /// Necklaces and amulets.
    Amulet,
    /// Head-slot circlets.
    Circlet,
    /// Finger rings.
    Ring,
}

/// The kind of readable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BookType {
    /// Hermaeus Mora's black books.
    BlackBook,
    /// Elder scrolls.
    ElderScroll,
    /// Journals and diaries.
    Journal,
    /// Letters and notes.
    Letter,
    /// Ordinary lore volumes.
    LoreBook,
    /// Crafting recipes.
    Recipe,
    /// Books that raise a skill when read.
    SkillBook,
    /// Tomes that teach a spell when read.
    SpellTome,
    /// Treasure maps.
    TreasureMap,
}

// ---------------------------------------------------------------------------
// Magic
// ---------------------------------------------------------------------------

/// The five schools of magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum MagicSchool {
    /// Alteration.
    Alteration,
    /// Conjuration.
    Conjuration,
    /// Destruction.
    Destruction,
    /// Illusion.
    Illusion,
    /// Restoration.
    Restoration,
}

/// The unit a trait strength value is expressed in.
///
/// A "Fortify Carry Weight 25" enchantment is 25 points; "Resist Fire 40%"
/// is 40 percent. Trait links with no magnitude leave both the strength and
/// the unit unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum StrengthUnit {
    /// Percentage modifier.
    Percentage,
    /// Flat point value.
    Point,
    /// Duration expressed in seconds.
    Second,
    /// Character- or skill-level value.
    Level,
}

// ---------------------------------------------------------------------------
// Geography
// ---------------------------------------------------------------------------

/// The nine holds of Skyrim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Hold {
    /// Eastmarch (Windhelm).
    Eastmarch,
    /// Falkreath Hold.
    Falkreath,
    /// Haafingar (Solitude).
    Haafingar,
    /// Hjaalmarch (Morthal).
    Hjaalmarch,
    /// The Pale (Dawnstar).
    ThePale,
    /// The Reach (Markarth).
    TheReach,
    /// The Rift (Riften).
    TheRift,
    /// Whiterun Hold.
    Whiterun,
    /// Winterhold.
    Winterhold,
}

impl Hold {
    /// Human-readable hold name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eastmarch => "Eastmarch",
            Self::Falkreath => "Falkreath",
            Self::Haafingar => "Haafingar",
            Self::Hjaalmarch => "Hjaalmarch",
            Self::ThePale => "The Pale",
            Self::TheReach => "The Reach",
            Self::TheRift => "The Rift",
            Self::Whiterun => "Whiterun",
            Self::Winterhold => "Winterhold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_are_stable() {
        assert_eq!(Category::Armor.as_str(), "armor");
        assert_eq!(Category::JewelryItem.as_str(), "jewelry_item");
        assert_eq!(Category::Property.as_str(), "property");
    }

    #[test]
    fn category_nouns_carry_articles() {
        assert_eq!(Category::Armor.noun(), "an armor item");
        assert_eq!(Category::Ingredient.noun(), "an ingredient");
        assert_eq!(Category::Staff.noun(), "a staff");
    }

    #[test]
    fn enum_roundtrip_serde() {
        let json = serde_json::to_string(&WeightClass::HeavyArmor).ok();
        assert_eq!(json.as_deref(), Some("\"HeavyArmor\""));
        let back: Result<WeightClass, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(back.is_ok());
    }
}
