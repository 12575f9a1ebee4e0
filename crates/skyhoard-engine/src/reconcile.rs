//! Category descriptors: the traits that parameterize the engine over
//! the ten record categories.
//!
//! The original tracker repeated the reconciliation algorithm once per
//! category. Here each category is a data variant plus one
//! [`Reconcilable`] impl describing its identifying fields, its scalar
//! match predicate, and how canonical values backfill the record. The
//! two trait-link modes are marker subtraits: [`Enchanted`] for the
//! override-permitted categories and [`Alchemical`] for the
//! exact-required ones. Books, staves, misc items, and properties
//! implement only the base trait.
//!
//! Impls live in [`crate::categories`], one module per category.

use skyhoard_types::{
    CanonicalAlchemicalLink, CanonicalEnchantmentLink, Category, GameId, ItemAlchemicalLink,
    ItemEnchantmentLink, ItemId,
};

/// A player record category that can be reconciled against a canonical
/// catalog collection.
///
/// Implementations must keep [`matches_scalars`](Self::matches_scalars)
/// and [`backfill`](Self::backfill) in lockstep: every field the
/// predicate inspects must be a field backfill overwrites, so that a
/// freshly backfilled record still matches its own canonical entry.
pub trait Reconcilable: Clone {
    /// The canonical catalog entry type for this category.
    type Canonical;

    /// The canonical entry's natural key (item code, or name plus hold
    /// for properties).
    type Key: Clone + PartialEq + core::fmt::Debug;

    /// Category tag, used for log fields and error nouns.
    const CATEGORY: Category;

    /// The record's identifier.
    fn id(&self) -> ItemId;

    /// The owning game.
    fn game_id(&self) -> GameId;

    /// Extract the natural key from a canonical entry.
    fn canonical_key(canonical: &Self::Canonical) -> Self::Key;

    /// Whether the canonical entry is one-of-a-kind per game.
    fn is_unique(canonical: &Self::Canonical) -> bool;

    /// Field-by-field wildcard comparison against a canonical entry
    /// (see [`crate::scalar`]).
    fn matches_scalars(&self, canonical: &Self::Canonical) -> bool;

    /// Whether the record carries the minimum identifying fields (its
    /// name or title). A record with zero candidates *and* identifying
    /// fields is a validation failure; without them it is merely
    /// undetermined.
    fn has_identifying_fields(&self) -> bool;

    /// Overwrite every matchable scalar with the canonical entry's
    /// authoritative value, correcting case and filling unset fields.
    fn backfill(&mut self, canonical: &Self::Canonical);

    /// The currently recorded canonical reference, if any.
    fn canonical_ref(&self) -> Option<&Self::Key>;

    /// Record or clear the canonical reference.
    fn set_canonical_ref(&mut self, key: Option<Self::Key>);
}

/// An enchantable category: armor, weapons, clothing, jewelry.
///
/// Candidates filter under the override-permitted rule
/// ([`crate::compat::enchantments_compatible`]).
pub trait Enchanted: Reconcilable {
    /// The record's attached enchantment links.
    fn enchantments(&self) -> &[ItemEnchantmentLink];

    /// Mutable access to the record's enchantment links, used when a
    /// resolution rewrites the derived subset.
    fn enchantments_mut(&mut self) -> &mut Vec<ItemEnchantmentLink>;

    /// Whether the canonical entry permits arbitrary player-added
    /// enchantments.
    fn canonical_enchantable(canonical: &Self::Canonical) -> bool;

    /// The canonical entry's inherent enchantment set.
    fn canonical_enchantments(canonical: &Self::Canonical) -> &[CanonicalEnchantmentLink];
}

/// An alchemical category: ingredients, potions.
///
/// Candidates filter under the exact-required rule
/// ([`crate::compat::alchemical_compatible`]).
pub trait Alchemical: Reconcilable {
    /// The record's attached alchemical-property links.
    fn alchemical_properties(&self) -> &[ItemAlchemicalLink];

    /// Mutable access to the record's property links, used when a
    /// resolution rewrites the derived subset.
    fn alchemical_properties_mut(&mut self) -> &mut Vec<ItemAlchemicalLink>;

    /// The canonical entry's inherent property set.
    fn canonical_properties(canonical: &Self::Canonical) -> &[CanonicalAlchemicalLink];
}
