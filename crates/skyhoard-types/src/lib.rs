//! Shared type definitions for the Skyhoard inventory tracker.
//!
//! This crate is the single source of truth for all types used across the
//! Skyhoard workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the web client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers and canonical natural keys
//! - [`enums`] -- Closed vocabularies (categories, taxonomy, geography)
//! - [`traits`] -- Trait catalogs (enchantments, alchemical properties)
//!   and the link tuples attaching them to entries and items
//! - [`canonical`] -- Read-only canonical catalog entries, one struct per
//!   category
//! - [`items`] -- Player-owned mutable records mirroring the canonical
//!   entries with every scalar optional

pub mod canonical;
pub mod enums;
pub mod ids;
pub mod items;
pub mod traits;

// Re-export all public types at crate root for convenience.
pub use canonical::{
    CanonicalArmor, CanonicalBook, CanonicalClothingItem, CanonicalIngredient,
    CanonicalJewelryItem, CanonicalMiscItem, CanonicalPotion, CanonicalProperty, CanonicalStaff,
    CanonicalWeapon,
};
pub use enums::{
    BodySlot, BookType, Category, Hold, JewelryType, MagicSchool, StrengthUnit, WeaponCategory,
    WeaponType, WeightClass,
};
pub use ids::{
    AlchemicalPropertyId, EnchantmentId, GameId, ItemCode, ItemId, PropertyKey,
};
pub use items::{
    Armor, Book, ClothingItem, Game, Ingredient, JewelryItem, MiscItem, Potion, Property, Staff,
    Weapon,
};
pub use traits::{
    AlchemicalProperty, CanonicalAlchemicalLink, CanonicalEnchantmentLink, Enchantment,
    ItemAlchemicalLink, ItemEnchantmentLink, MAX_ALCHEMICAL_PRIORITY,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs and keys
        let _ = crate::ids::GameId::export_all();
        let _ = crate::ids::ItemId::export_all();
        let _ = crate::ids::EnchantmentId::export_all();
        let _ = crate::ids::AlchemicalPropertyId::export_all();
        let _ = crate::ids::ItemCode::export_all();
        let _ = crate::ids::PropertyKey::export_all();

        // Enums
        let _ = crate::enums::Category::export_all();
        let _ = crate::enums::WeightClass::export_all();
        let _ = crate::enums::BodySlot::export_all();
        let _ = crate::enums::WeaponCategory::export_all();
        let _ = crate::enums::WeaponType::export_all();
        let _ = crate::enums::JewelryType::export_all();
        let _ = crate::enums::BookType::export_all();
        let _ = crate::enums::MagicSchool::export_all();
        let _ = crate::enums::StrengthUnit::export_all();
        let _ = crate::enums::Hold::export_all();

        // Trait catalogs and links
        let _ = crate::traits::Enchantment::export_all();
        let _ = crate::traits::AlchemicalProperty::export_all();
        let _ = crate::traits::CanonicalEnchantmentLink::export_all();
        let _ = crate::traits::CanonicalAlchemicalLink::export_all();
        let _ = crate::traits::ItemEnchantmentLink::export_all();
        let _ = crate::traits::ItemAlchemicalLink::export_all();

        // Canonical entries
        let _ = crate::canonical::CanonicalArmor::export_all();
        let _ = crate::canonical::CanonicalWeapon::export_all();
        let _ = crate::canonical::CanonicalClothingItem::export_all();
        let _ = crate::canonical::CanonicalJewelryItem::export_all();
        let _ = crate::canonical::CanonicalIngredient::export_all();
        let _ = crate::canonical::CanonicalPotion::export_all();
        let _ = crate::canonical::CanonicalBook::export_all();
        let _ = crate::canonical::CanonicalStaff::export_all();
        let _ = crate::canonical::CanonicalMiscItem::export_all();
        let _ = crate::canonical::CanonicalProperty::export_all();

        // Player records
        let _ = crate::items::Game::export_all();
        let _ = crate::items::Armor::export_all();
        let _ = crate::items::Weapon::export_all();
        let _ = crate::items::ClothingItem::export_all();
        let _ = crate::items::JewelryItem::export_all();
        let _ = crate::items::Ingredient::export_all();
        let _ = crate::items::Potion::export_all();
        let _ = crate::items::Book::export_all();
        let _ = crate::items::Staff::export_all();
        let _ = crate::items::MiscItem::export_all();
        let _ = crate::items::Property::export_all();
    }
}
