//! Weapons: enchantable, matched on name, handedness class, weapon type,
//! unit weight, and magical-effects text.

use skyhoard_types::{
    CanonicalEnchantmentLink, CanonicalWeapon, Category, GameId, ItemCode, ItemEnchantmentLink,
    ItemId, Weapon,
};

use crate::reconcile::{Enchanted, Reconcilable};
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for Weapon {
    type Canonical = CanonicalWeapon;
    type Key = ItemCode;

    const CATEGORY: Category = Category::Weapon;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalWeapon) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalWeapon) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalWeapon) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
            && value_matches(self.category, canonical.category)
            && value_matches(self.weapon_type, canonical.weapon_type)
            && value_matches(self.unit_weight, canonical.unit_weight)
            && text_matches(
                self.magical_effects.as_deref(),
                canonical.magical_effects.as_deref(),
            )
    }

    fn has_identifying_fields(&self) -> bool {
        self.name.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalWeapon) {
        self.name = Some(canonical.name.clone());
        self.category = canonical.category;
        self.weapon_type = canonical.weapon_type;
        self.unit_weight = canonical.unit_weight;
        self.magical_effects = canonical.magical_effects.clone();
    }

    fn canonical_ref(&self) -> Option<&ItemCode> {
        self.canonical_code.as_ref()
    }

    fn set_canonical_ref(&mut self, key: Option<ItemCode>) {
        self.canonical_code = key;
    }
}

impl Enchanted for Weapon {
    fn enchantments(&self) -> &[ItemEnchantmentLink] {
        &self.enchantments
    }

    fn enchantments_mut(&mut self) -> &mut Vec<ItemEnchantmentLink> {
        &mut self.enchantments
    }

    fn canonical_enchantable(canonical: &CanonicalWeapon) -> bool {
        canonical.enchantable
    }

    fn canonical_enchantments(canonical: &CanonicalWeapon) -> &[CanonicalEnchantmentLink] {
        &canonical.enchantments
    }
}

#[cfg(test)]
mod tests {
    use skyhoard_types::{WeaponCategory, WeaponType};

    use super::*;

    #[test]
    fn handedness_and_type_constrain_exactly() {
        let canonical = CanonicalWeapon {
            code: ItemCode::new("0001397E"),
            name: String::from("Iron Sword"),
            category: Some(WeaponCategory::OneHanded),
            weapon_type: Some(WeaponType::Sword),
            unit_weight: None,
            magical_effects: None,
            enchantable: true,
            unique_item: false,
            quest_item: false,
            enchantments: Vec::new(),
        };
        let mut weapon = Weapon::new(GameId::new());
        weapon.name = Some(String::from("iron sword"));
        weapon.category = Some(WeaponCategory::OneHanded);
        assert!(weapon.matches_scalars(&canonical));
        weapon.weapon_type = Some(WeaponType::WarAxe);
        assert!(!weapon.matches_scalars(&canonical));
    }
}
