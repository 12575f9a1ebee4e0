//! Potions: alchemical, matched on name, unit weight, and
//! magical-effects text.

use skyhoard_types::{
    CanonicalAlchemicalLink, CanonicalPotion, Category, GameId, ItemAlchemicalLink, ItemCode,
    ItemId, Potion,
};

use crate::reconcile::{Alchemical, Reconcilable};
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for Potion {
    type Canonical = CanonicalPotion;
    type Key = ItemCode;

    const CATEGORY: Category = Category::Potion;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalPotion) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalPotion) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalPotion) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
            && value_matches(self.unit_weight, canonical.unit_weight)
            && text_matches(
                self.magical_effects.as_deref(),
                canonical.magical_effects.as_deref(),
            )
    }

    fn has_identifying_fields(&self) -> bool {
        self.name.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalPotion) {
        self.name = Some(canonical.name.clone());
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

impl Alchemical for Potion {
    fn alchemical_properties(&self) -> &[ItemAlchemicalLink] {
        &self.alchemical_properties
    }

    fn alchemical_properties_mut(&mut self) -> &mut Vec<ItemAlchemicalLink> {
        &mut self.alchemical_properties
    }

    fn canonical_properties(canonical: &CanonicalPotion) -> &[CanonicalAlchemicalLink] {
        &canonical.alchemical_properties
    }
}
