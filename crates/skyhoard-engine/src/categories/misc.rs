//! Miscellaneous items: plain (no trait links), matched on name, kind
//! tag, and unit weight.

use skyhoard_types::{CanonicalMiscItem, Category, GameId, ItemCode, ItemId, MiscItem};

use crate::reconcile::Reconcilable;
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for MiscItem {
    type Canonical = CanonicalMiscItem;
    type Key = ItemCode;

    const CATEGORY: Category = Category::MiscItem;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalMiscItem) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalMiscItem) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalMiscItem) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
            && text_matches(self.item_type.as_deref(), canonical.item_type.as_deref())
            && value_matches(self.unit_weight, canonical.unit_weight)
    }

    fn has_identifying_fields(&self) -> bool {
        self.name.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalMiscItem) {
        self.name = Some(canonical.name.clone());
        self.item_type = canonical.item_type.clone();
        self.unit_weight = canonical.unit_weight;
    }

    fn canonical_ref(&self) -> Option<&ItemCode> {
        self.canonical_code.as_ref()
    }

    fn set_canonical_ref(&mut self, key: Option<ItemCode>) {
        self.canonical_code = key;
    }
}
