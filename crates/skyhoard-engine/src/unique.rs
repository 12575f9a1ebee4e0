//! The uniqueness guard: at most one record per game may hold a
//! one-of-a-kind canonical entry.
//!
//! Runs after backfill, so the check uses the resolved identity rather
//! than raw field values. The caller supplies the sibling claims --
//! every other record in the same game and category that currently
//! references a canonical entry. A record never conflicts with its own
//! previous claim.

use skyhoard_types::ItemId;

use crate::error::ReconcileError;

/// One sibling record's current canonical claim within a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingClaim<K> {
    /// The sibling record.
    pub item_id: ItemId,
    /// The canonical key it references.
    pub canonical_key: K,
}

impl<K> SiblingClaim<K> {
    /// Create a claim record.
    pub const fn new(item_id: ItemId, canonical_key: K) -> Self {
        Self {
            item_id,
            canonical_key,
        }
    }
}

/// Reject the resolution if another record already claims `key`.
///
/// Claims by `item_id` itself are ignored: re-saving a record must not
/// conflict with its own earlier resolution.
pub fn assert_not_duplicate<K: PartialEq>(
    item_id: ItemId,
    key: &K,
    claims: &[SiblingClaim<K>],
) -> Result<(), ReconcileError> {
    let taken = claims
        .iter()
        .any(|claim| claim.item_id != item_id && claim.canonical_key == *key);
    if taken {
        return Err(ReconcileError::DuplicateUniqueItem);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use skyhoard_types::ItemCode;

    use super::*;

    #[test]
    fn no_claims_passes() {
        let result = assert_not_duplicate(ItemId::new(), &ItemCode::new("000AB123"), &[]);
        assert!(result.is_ok());
    }

    #[test]
    fn foreign_claim_on_the_same_key_rejects() {
        let key = ItemCode::new("000AB123");
        let claims = vec![SiblingClaim::new(ItemId::new(), key.clone())];
        let result = assert_not_duplicate(ItemId::new(), &key, &claims);
        assert_eq!(result, Err(ReconcileError::DuplicateUniqueItem));
    }

    #[test]
    fn own_previous_claim_is_ignored() {
        let id = ItemId::new();
        let key = ItemCode::new("000AB123");
        let claims = vec![SiblingClaim::new(id, key.clone())];
        assert!(assert_not_duplicate(id, &key, &claims).is_ok());
    }

    #[test]
    fn claims_on_other_keys_do_not_conflict() {
        let claims = vec![SiblingClaim::new(ItemId::new(), ItemCode::new("000AB124"))];
        let result = assert_not_duplicate(ItemId::new(), &ItemCode::new("000AB123"), &claims);
        assert!(result.is_ok());
    }
}
