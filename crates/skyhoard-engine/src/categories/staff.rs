//! Staves: plain (no trait links), matched on name, school, base damage,
//! unit weight, and magical-effects text.

use skyhoard_types::{CanonicalStaff, Category, GameId, ItemCode, ItemId, Staff};

use crate::reconcile::Reconcilable;
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for Staff {
    type Canonical = CanonicalStaff;
    type Key = ItemCode;

    const CATEGORY: Category = Category::Staff;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalStaff) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalStaff) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalStaff) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
            && value_matches(self.school, canonical.school)
            && value_matches(self.base_damage, canonical.base_damage)
            && value_matches(self.unit_weight, canonical.unit_weight)
            && text_matches(
                self.magical_effects.as_deref(),
                canonical.magical_effects.as_deref(),
            )
    }

    fn has_identifying_fields(&self) -> bool {
        self.name.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalStaff) {
        self.name = Some(canonical.name.clone());
        self.school = canonical.school;
        self.base_damage = canonical.base_damage;
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
