//! Error types for the reconciliation engine.
//!
//! Only two conditions are fatal to a save: the record names something
//! the catalog has never heard of, or it claims a one-of-a-kind item a
//! sibling record already holds. Ambiguity is deliberately *not* here --
//! a record matching several canonical entries is a valid, undetermined
//! state that resolves itself when the player supplies more detail
//! ([`crate::resolve::Outcome::Ambiguous`]).

/// Errors that can occur during canonical reconciliation.
///
/// Both variants render as the record-scoped validation message shown to
/// the player, matching the phrasing of the original tracker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// No canonical entry survived filtering even though the record has
    /// its identifying fields set. The record describes something that
    /// does not exist in the game.
    #[error("doesn't match {noun} that exists in Skyrim")]
    NoCanonicalMatch {
        /// Category noun with article ("an armor item", "a weapon", ...).
        noun: &'static str,
    },

    /// The record resolved to a one-of-a-kind canonical entry that
    /// another record in the same game already holds.
    #[error("is a duplicate of a unique in-game item")]
    DuplicateUniqueItem,
}

#[cfg(test)]
mod tests {
    use skyhoard_types::Category;

    use super::*;

    #[test]
    fn no_match_message_names_the_category_and_game() {
        let err = ReconcileError::NoCanonicalMatch {
            noun: Category::Armor.noun(),
        };
        assert_eq!(
            err.to_string(),
            "doesn't match an armor item that exists in Skyrim"
        );
    }

    #[test]
    fn duplicate_message_matches_the_tracker_phrasing() {
        let err = ReconcileError::DuplicateUniqueItem;
        assert_eq!(err.to_string(), "is a duplicate of a unique in-game item");
    }
}
