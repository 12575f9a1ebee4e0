//! Trait-link compatibility: the second filtering stage, applied after
//! scalar matching for categories that carry trait links.
//!
//! Only *player-entered* links (`added_automatically == false`)
//! constrain candidates. Derived links are the output of a previous
//! resolution, not evidence about the item, and feeding them back in
//! would let a stale match veto its own correction.
//!
//! Two modes exist:
//!
//! - **Override-permitted** (enchantments): an `enchantable` candidate
//!   accepts any player enchantments; a non-enchantable candidate must
//!   inherently carry every player link at equal strength.
//! - **Exact-required** (alchemical properties): every player link must
//!   appear in the candidate's inherent set at equal strength *and*
//!   duration, where `None` matches only `None`.
//!
//! In both modes, extra inherent links on the candidate never
//! disqualify it, and an item with no player links is compatible with
//! every scalar-matched candidate.

use skyhoard_types::{
    CanonicalAlchemicalLink, CanonicalEnchantmentLink, ItemAlchemicalLink, ItemEnchantmentLink,
};

/// Link equality for enchantments: same enchantment, same strength.
///
/// `None` strength matches only `None` -- a magnitude-less link is a
/// concrete fact, not a wildcard. This deliberately differs from scalar
/// matching in [`crate::scalar`].
pub fn enchantment_link_eq(item: &ItemEnchantmentLink, canonical: &CanonicalEnchantmentLink) -> bool {
    item.enchantment_id == canonical.enchantment_id && item.strength == canonical.strength
}

/// Link equality for alchemical properties: same property, same
/// strength, same duration, with `None` matching only `None`.
pub fn alchemical_link_eq(item: &ItemAlchemicalLink, canonical: &CanonicalAlchemicalLink) -> bool {
    item.property_id == canonical.property_id
        && item.strength == canonical.strength
        && item.duration == canonical.duration
}

/// Override-permitted compatibility for enchantable categories.
///
/// Passes when the candidate is `enchantable` (player-added enchantments
/// are always legitimate), or when every player-entered link in
/// `item_links` appears in the candidate's `inherent` set at equal
/// strength. An item with no player-entered links always passes.
pub fn enchantments_compatible(
    item_links: &[ItemEnchantmentLink],
    enchantable: bool,
    inherent: &[CanonicalEnchantmentLink],
) -> bool {
    let mut player = item_links.iter().filter(|l| !l.added_automatically).peekable();
    if player.peek().is_none() || enchantable {
        return true;
    }
    player.all(|link| inherent.iter().any(|c| enchantment_link_eq(link, c)))
}

/// Exact-required compatibility for alchemical categories.
///
/// Every player-entered link must appear in the candidate's `inherent`
/// set at equal strength and duration. An item with no player-entered
/// links always passes.
pub fn alchemical_compatible(
    item_links: &[ItemAlchemicalLink],
    inherent: &[CanonicalAlchemicalLink],
) -> bool {
    item_links
        .iter()
        .filter(|l| !l.added_automatically)
        .all(|link| inherent.iter().any(|c| alchemical_link_eq(link, c)))
}
