//! Ingredients: alchemical, matched on name and unit weight. The
//! canonical `purchasable` flag is informational and never constrains
//! matching.

use skyhoard_types::{
    CanonicalAlchemicalLink, CanonicalIngredient, Category, GameId, Ingredient,
    ItemAlchemicalLink, ItemCode, ItemId,
};

use crate::reconcile::{Alchemical, Reconcilable};
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for Ingredient {
    type Canonical = CanonicalIngredient;
    type Key = ItemCode;

    const CATEGORY: Category = Category::Ingredient;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalIngredient) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalIngredient) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalIngredient) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
            && value_matches(self.unit_weight, canonical.unit_weight)
    }

    fn has_identifying_fields(&self) -> bool {
        self.name.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalIngredient) {
        self.name = Some(canonical.name.clone());
        self.unit_weight = canonical.unit_weight;
    }

    fn canonical_ref(&self) -> Option<&ItemCode> {
        self.canonical_code.as_ref()
    }

    fn set_canonical_ref(&mut self, key: Option<ItemCode>) {
        self.canonical_code = key;
    }
}

impl Alchemical for Ingredient {
    fn alchemical_properties(&self) -> &[ItemAlchemicalLink] {
        &self.alchemical_properties
    }

    fn alchemical_properties_mut(&mut self) -> &mut Vec<ItemAlchemicalLink> {
        &mut self.alchemical_properties
    }

    fn canonical_properties(canonical: &CanonicalIngredient) -> &[CanonicalAlchemicalLink] {
        &canonical.alchemical_properties
    }
}
