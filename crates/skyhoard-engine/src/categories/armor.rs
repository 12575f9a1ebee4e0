//! Armor: enchantable, matched on name, weight class, body slot, unit
//! weight, and magical-effects text.

use skyhoard_types::{
    Armor, CanonicalArmor, CanonicalEnchantmentLink, Category, GameId, ItemCode,
    ItemEnchantmentLink, ItemId,
};

use crate::reconcile::{Enchanted, Reconcilable};
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for Armor {
    type Canonical = CanonicalArmor;
    type Key = ItemCode;

    const CATEGORY: Category = Category::Armor;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalArmor) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalArmor) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalArmor) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
            && value_matches(self.weight_class, canonical.weight_class)
            && value_matches(self.body_slot, canonical.body_slot)
            && value_matches(self.unit_weight, canonical.unit_weight)
            && text_matches(
                self.magical_effects.as_deref(),
                canonical.magical_effects.as_deref(),
            )
    }

    fn has_identifying_fields(&self) -> bool {
        self.name.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalArmor) {
        self.name = Some(canonical.name.clone());
        self.weight_class = canonical.weight_class;
        self.body_slot = canonical.body_slot;
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

impl Enchanted for Armor {
    fn enchantments(&self) -> &[ItemEnchantmentLink] {
        &self.enchantments
    }

    fn enchantments_mut(&mut self) -> &mut Vec<ItemEnchantmentLink> {
        &mut self.enchantments
    }

    fn canonical_enchantable(canonical: &CanonicalArmor) -> bool {
        canonical.enchantable
    }

    fn canonical_enchantments(canonical: &CanonicalArmor) -> &[CanonicalEnchantmentLink] {
        &canonical.enchantments
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use skyhoard_types::{BodySlot, WeightClass};

    use super::*;

    fn canonical(name: &str) -> CanonicalArmor {
        CanonicalArmor {
            code: ItemCode::new("00013952"),
            name: String::from(name),
            weight_class: Some(WeightClass::HeavyArmor),
            body_slot: Some(BodySlot::Body),
            unit_weight: Some(dec!(38)),
            magical_effects: None,
            enchantable: true,
            unique_item: false,
            quest_item: false,
            enchantments: Vec::new(),
        }
    }

    #[test]
    fn name_matches_case_insensitively() {
        let mut armor = Armor::new(GameId::new());
        armor.name = Some(String::from("ebony armor"));
        assert!(armor.matches_scalars(&canonical("Ebony Armor")));
    }

    #[test]
    fn unset_fields_do_not_constrain() {
        let armor = Armor::new(GameId::new());
        assert!(armor.matches_scalars(&canonical("Ebony Armor")));
    }

    #[test]
    fn set_field_against_canonical_null_rejects() {
        let mut armor = Armor::new(GameId::new());
        armor.name = Some(String::from("Ebony Armor"));
        armor.magical_effects = Some(String::from("Fortify sneaking"));
        assert!(!armor.matches_scalars(&canonical("Ebony Armor")));
    }

    #[test]
    fn backfill_overwrites_every_matchable_scalar() {
        let mut armor = Armor::new(GameId::new());
        armor.name = Some(String::from("ebony armor"));
        armor.backfill(&canonical("Ebony Armor"));
        assert_eq!(armor.name.as_deref(), Some("Ebony Armor"));
        assert_eq!(armor.weight_class, Some(WeightClass::HeavyArmor));
        assert_eq!(armor.unit_weight, Some(dec!(38)));
        // A freshly backfilled record matches its own entry.
        assert!(armor.matches_scalars(&canonical("Ebony Armor")));
    }
}
