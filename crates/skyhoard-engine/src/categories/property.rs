//! Homesteads: the simpler single-entity case. Matched on name, hold,
//! and city; keyed by name plus hold; always one-per-game.
//!
//! The player-side amenity booleans (what has actually been built) are
//! player state, not matchable fields, and backfill leaves them alone.

use skyhoard_types::{CanonicalProperty, Category, GameId, ItemId, Property, PropertyKey};

use crate::reconcile::Reconcilable;
use crate::scalar::{text_matches, value_matches};

impl Reconcilable for Property {
    type Canonical = CanonicalProperty;
    type Key = PropertyKey;

    const CATEGORY: Category = Category::Property;

    fn id(&self) -> ItemId {
        self.id
    }

    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn canonical_key(canonical: &CanonicalProperty) -> PropertyKey {
        canonical.key()
    }

    fn is_unique(_canonical: &CanonicalProperty) -> bool {
        // A playthrough owns Breezehome or it does not; every homestead
        // is one-per-game.
        true
    }

    fn matches_scalars(&self, canonical: &CanonicalProperty) -> bool {
        text_matches(self.name.as_deref(), Some(&canonical.name))
            && value_matches(self.hold, Some(canonical.hold))
            && text_matches(self.city.as_deref(), canonical.city.as_deref())
    }

    fn has_identifying_fields(&self) -> bool {
        self.name.is_some()
    }

    fn backfill(&mut self, canonical: &CanonicalProperty) {
        self.name = Some(canonical.name.clone());
        self.hold = Some(canonical.hold);
        self.city = canonical.city.clone();
    }

    fn canonical_ref(&self) -> Option<&PropertyKey> {
        self.canonical_key.as_ref()
    }

    fn set_canonical_ref(&mut self, key: Option<PropertyKey>) {
        self.canonical_key = key;
    }
}

#[cfg(test)]
mod tests {
    use skyhoard_types::Hold;

    use super::*;

    #[test]
    fn backfill_leaves_amenity_state_alone() {
        let canonical = CanonicalProperty {
            name: String::from("Breezehome"),
            hold: Hold::Whiterun,
            city: Some(String::from("Whiterun")),
            alchemy_lab_available: true,
            arcane_enchanter_available: false,
            forge_available: false,
        };
        let mut property = Property::new(GameId::new());
        property.name = Some(String::from("breezehome"));
        property.alchemy_lab_built = true;
        assert!(property.matches_scalars(&canonical));
        property.backfill(&canonical);
        assert_eq!(property.name.as_deref(), Some("Breezehome"));
        assert_eq!(property.hold, Some(Hold::Whiterun));
        assert!(property.alchemy_lab_built);
    }
}
