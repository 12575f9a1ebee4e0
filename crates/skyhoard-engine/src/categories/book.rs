//! Books: plain (no trait links), matched on title -- widened by the
//! catalog's published title variants -- plus authors, book type, skill
//! name, and unit weight.

use skyhoard_types::{Book, CanonicalBook, Category, GameId, ItemCode, ItemId};

use crate::reconcile::Reconcilable;
use crate::scalar::{text_matches, text_matches_any, value_matches};

impl Reconcilable for Book {
    type Canonical = CanonicalBook;
    type Key = ItemCode;

    const CATEGORY: Category = Category::Book;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalBook) -> ItemCode {
        canonical.code.clone()
    }

    fn is_unique(canonical: &CanonicalBook) -> bool {
        canonical.unique_item
    }

    fn matches_scalars(&self, canonical: &CanonicalBook) -> bool {
        text_matches_any(
            self.title.as_deref(),
            Some(&canonical.title),
            &canonical.title_variants,
        ) && text_matches(self.authors.as_deref(), canonical.authors.as_deref())
            && value_matches(self.book_type, canonical.book_type)
            && text_matches(self.skill_name.as_deref(), canonical.skill_name.as_deref())
            && value_matches(self.unit_weight, canonical.unit_weight)
    }

    fn has_identifying_fields(&self) -> bool {
        self.title.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalBook) {
        // The primary title wins even when the player typed a variant.
        self.title = Some(canonical.title.clone());
        self.authors = canonical.authors.clone();
        self.book_type = canonical.book_type;
        self.skill_name = canonical.skill_name.clone();
        self.unit_weight = canonical.unit_weight;
    }

    fn canonical_ref(&self) -> Option<&ItemCode> {
        self.canonical_code.as_ref()
    }

    fn set_canonical_ref(&mut self, key: Option<ItemCode>) {
        self.canonical_code = key;
    }
}
