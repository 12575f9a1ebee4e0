//! Clothing: enchantable, matched on name, body slot, unit weight, and
//! magical-effects text.

use skyhoard_types::{
    CanonicalClothingItem, CanonicalEnchantmentLink, Category, ClothingItem, GameId, ItemCode,
    ItemEnchantmentLink, ItemId,
};

use crate::reconcile::{Enchanted, Reconcilable};
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for ClothingItem {
    type Canonical = CanonicalClothingItem;
    type Key = ItemCode;

    const CATEGORY: Category = Category::ClothingItem;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalClothingItem) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalClothingItem) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalClothingItem) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
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

    fn backfill(&mut self, canonical: &CanonicalClothingItem) {
        self.name = Some(canonical.name.clone());
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

impl Enchanted for ClothingItem {
    fn enchantments(&self) -> &[ItemEnchantmentLink] {
        &self.enchantments
    }

    fn enchantments_mut(&mut self) -> &mut Vec<ItemEnchantmentLink> {
        &mut self.enchantments
    }

    fn canonical_enchantable(canonical: &CanonicalClothingItem) -> bool {
        canonical.enchantable
    }

    fn canonical_enchantments(canonical: &CanonicalClothingItem) -> &[CanonicalEnchantmentLink] {
        &canonical.enchantments
    }
}
