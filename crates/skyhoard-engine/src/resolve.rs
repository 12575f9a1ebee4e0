//! Disambiguation and backfill: the state machine that turns a filtered
//! candidate set into a resolution.
//!
//! Every save attempt runs the full pipeline from scratch -- scalar
//! matching, trait-compatibility filtering, then this module -- with the
//! previous canonical reference used only to diff trait links, never as
//! a matching hint. Per save attempt:
//!
//! - **Zero candidates** with identifying fields set is a hard
//!   validation failure ([`crate::error::ReconcileError::NoCanonicalMatch`]);
//!   with nothing identifying set it is merely
//!   [`Outcome::Unidentified`].
//! - **Exactly one candidate** records the reference, overwrites every
//!   matchable scalar with the canonical value, rewrites the derived
//!   trait-link subset, then runs the uniqueness guard.
//! - **Multiple candidates** is [`Outcome::Ambiguous`]: a valid,
//!   undetermined state. The reference clears, scalars stay exactly as
//!   supplied, and stale derived links are purged because no unique
//!   source of truth remains to justify them.
//!
//! The derived-link rule, in all outcomes: the automatic set becomes a
//! fresh copy of the resolved entry's inherent set (empty when nothing
//! resolved) -- except that a record holding only player-entered links
//! gets no automatic set, so manual data entered ahead of the first
//! match is never doubled. Player-entered links are never created,
//! modified, or removed here.

use serde::Serialize;
use skyhoard_types::{ItemAlchemicalLink, ItemEnchantmentLink};

use crate::compat::{alchemical_compatible, enchantments_compatible};
use crate::error::ReconcileError;
use crate::reconcile::{Alchemical, Enchanted, Reconcilable};
use crate::unique::{SiblingClaim, assert_not_duplicate};

// =========================================================================
// Result types
// =========================================================================

/// How a save attempt classified against the canonical catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome<K> {
    /// Exactly one canonical entry survived filtering; the record now
    /// references it.
    Matched {
        /// The resolved entry's natural key.
        key: K,
    },
    /// Several entries survived; the record waits for more detail.
    Ambiguous {
        /// How many entries remained.
        candidates: usize,
    },
    /// Nothing survived, but the record has no identifying fields yet,
    /// so there is nothing to validate against.
    Unidentified,
}

impl<K> Outcome<K> {
    /// Whether this outcome carries a canonical reference.
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// The trait-link changes a resolution produced, for the persistence
/// layer to apply within the same transaction as the scalar writes.
///
/// Additions are always tagged `added_automatically = true`; removals
/// only ever name previously derived links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDiff<L> {
    /// Derived links that no longer correspond to the resolution.
    pub remove: Vec<L>,
    /// Fresh derived links copied from the resolved entry.
    pub add: Vec<L>,
}

impl<L> LinkDiff<L> {
    /// Whether the resolution changed any links.
    pub const fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_empty()
    }
}

/// A successful resolution: the corrected record, its outcome, and the
/// trait-link diff (`()` for categories without trait links).
///
/// The record copy already reflects the diff; the diff exists so the
/// persistence layer can apply relational changes explicitly instead of
/// re-deriving them.
#[derive(Debug, Clone)]
pub struct Resolution<T: Reconcilable, D> {
    /// The corrected record (scalars backfilled on a unique match).
    pub item: T,
    /// The classification this save attempt reached.
    pub outcome: Outcome<T::Key>,
    /// Trait-link changes to persist.
    pub diff: D,
}

// =========================================================================
// Shared machinery
// =========================================================================

/// Classify a filtered candidate set and produce the corrected record.
///
/// Returns the matched entry alongside, so callers can derive trait
/// links from it.
fn conclude<'a, T: Reconcilable>(
    item: &T,
    candidates: &[&'a T::Canonical],
    claims: &[SiblingClaim<T::Key>],
) -> Result<(T, Outcome<T::Key>, Option<&'a T::Canonical>), ReconcileError> {
    match candidates {
        [] => {
            if item.has_identifying_fields() {
                tracing::debug!(
                    category = T::CATEGORY.as_str(),
                    item = %item.id(),
                    "no canonical candidate for an identified record"
                );
                return Err(ReconcileError::NoCanonicalMatch {
                    noun: T::CATEGORY.noun(),
                });
            }
            let mut resolved = item.clone();
            resolved.set_canonical_ref(None);
            Ok((resolved, Outcome::Unidentified, None))
        }
        [only] => {
            let mut resolved = item.clone();
            resolved.backfill(only);
            let key = T::canonical_key(only);
            if T::is_unique(only) {
                assert_not_duplicate(item.id(), &key, claims)?;
            }
            tracing::debug!(
                category = T::CATEGORY.as_str(),
                item = %item.id(),
                key = ?key,
                "record resolved to a unique canonical entry"
            );
            resolved.set_canonical_ref(Some(key.clone()));
            Ok((resolved, Outcome::Matched { key }, Some(*only)))
        }
        many => {
            tracing::debug!(
                category = T::CATEGORY.as_str(),
                item = %item.id(),
                candidates = many.len(),
                "record is ambiguous; waiting for more detail"
            );
            let mut resolved = item.clone();
            resolved.set_canonical_ref(None);
            Ok((resolved, Outcome::Ambiguous { candidates: many.len() }, None))
        }
    }
}

/// Rewrite the derived subset of `links` to mirror the resolved entry's
/// inherent set, returning the applied diff.
///
/// `canonical` is `None` when nothing resolved, which empties the
/// derived subset. A record holding only player-entered links receives
/// no derived set (the first-creation guard against doubling manual
/// data).
fn reconcile_links<L, C>(
    links: &mut Vec<L>,
    canonical: Option<&[C]>,
    is_derived: impl Fn(&L) -> bool,
    derive: impl Fn(&C) -> L,
) -> LinkDiff<L>
where
    L: Clone + PartialEq,
{
    let target: Vec<L> = match canonical {
        None => Vec::new(),
        Some(inherent) => {
            let has_player = links.iter().any(|l| !is_derived(l));
            let has_derived = links.iter().any(&is_derived);
            if has_player && !has_derived {
                Vec::new()
            } else {
                inherent.iter().map(&derive).collect()
            }
        }
    };

    let remove: Vec<L> = links
        .iter()
        .filter(|l| is_derived(l) && !target.contains(l))
        .cloned()
        .collect();
    let add: Vec<L> = target
        .iter()
        .filter(|t| !links.contains(t))
        .cloned()
        .collect();

    links.retain(|l| !is_derived(l) || target.contains(l));
    links.extend(add.iter().cloned());

    LinkDiff { remove, add }
}

// =========================================================================
// Entry points, one per trait-link mode
// =========================================================================

/// Resolve a record in a category without trait links (books, staves,
/// misc items, properties).
pub fn resolve<T: Reconcilable>(
    item: &T,
    catalog: &[T::Canonical],
    claims: &[SiblingClaim<T::Key>],
) -> Result<Resolution<T, ()>, ReconcileError> {
    let candidates: Vec<&T::Canonical> = catalog
        .iter()
        .filter(|c| item.matches_scalars(c))
        .collect();
    let (resolved, outcome, _matched) = conclude(item, &candidates, claims)?;
    Ok(Resolution {
        item: resolved,
        outcome,
        diff: (),
    })
}

/// Resolve a record in an enchantable category (armor, weapons,
/// clothing, jewelry) under the override-permitted compatibility rule.
pub fn resolve_enchanted<T: Enchanted>(
    item: &T,
    catalog: &[T::Canonical],
    claims: &[SiblingClaim<T::Key>],
) -> Result<Resolution<T, LinkDiff<ItemEnchantmentLink>>, ReconcileError> {
    let candidates: Vec<&T::Canonical> = catalog
        .iter()
        .filter(|c| item.matches_scalars(c))
        .filter(|c| {
            enchantments_compatible(
                item.enchantments(),
                T::canonical_enchantable(c),
                T::canonical_enchantments(c),
            )
        })
        .collect();
    let (mut resolved, outcome, matched) = conclude(item, &candidates, claims)?;
    let diff = reconcile_links(
        resolved.enchantments_mut(),
        matched.map(T::canonical_enchantments),
        |l| l.added_automatically,
        |c| ItemEnchantmentLink::derived(c.enchantment_id, c.strength),
    );
    Ok(Resolution {
        item: resolved,
        outcome,
        diff,
    })
}

/// Resolve a record in an alchemical category (ingredients, potions)
/// under the exact-required compatibility rule.
pub fn resolve_alchemical<T: Alchemical>(
    item: &T,
    catalog: &[T::Canonical],
    claims: &[SiblingClaim<T::Key>],
) -> Result<Resolution<T, LinkDiff<ItemAlchemicalLink>>, ReconcileError> {
    let candidates: Vec<&T::Canonical> = catalog
        .iter()
        .filter(|c| item.matches_scalars(c))
        .filter(|c| alchemical_compatible(item.alchemical_properties(), T::canonical_properties(c)))
        .collect();
    let (mut resolved, outcome, matched) = conclude(item, &candidates, claims)?;
    let diff = reconcile_links(
        resolved.alchemical_properties_mut(),
        matched.map(T::canonical_properties),
        |l| l.added_automatically,
        |c| ItemAlchemicalLink::derived(c.property_id, c.strength, c.duration),
    );
    Ok(Resolution {
        item: resolved,
        outcome,
        diff,
    })
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use skyhoard_types::{
        Armor, CanonicalArmor, CanonicalAlchemicalLink, CanonicalEnchantmentLink,
        CanonicalIngredient, CanonicalProperty, EnchantmentId, AlchemicalPropertyId, GameId,
        Hold, Ingredient, ItemCode, ItemEnchantmentLink, Property, WeightClass,
    };

    use super::*;

    fn canonical_armor(code: &str, name: &str, weight: Decimal) -> CanonicalArmor {
        CanonicalArmor {
            code: ItemCode::new(code),
            name: String::from(name),
            weight_class: None,
            body_slot: None,
            unit_weight: Some(weight),
            magical_effects: None,
            enchantable: true,
            unique_item: false,
            quest_item: false,
            enchantments: Vec::new(),
        }
    }

    fn canonical_ingredient(code: &str, name: &str) -> CanonicalIngredient {
        CanonicalIngredient {
            code: ItemCode::new(code),
            name: String::from(name),
            unit_weight: Some(dec!(0.25)),
            purchasable: true,
            unique_item: false,
            alchemical_properties: Vec::new(),
        }
    }

    fn armor_named(game_id: GameId, name: &str) -> Armor {
        let mut armor = Armor::new(game_id);
        armor.name = Some(String::from(name));
        armor
    }

    // --- Scenario A: unique match backfills authoritative values ---

    #[test]
    fn unique_match_backfills_name_case_and_missing_fields() {
        let mut first = canonical_armor("00013952", "Steel Plate Armor", dec!(20));
        first.weight_class = Some(WeightClass::HeavyArmor);
        let second = canonical_armor("00013953", "Steel Plate Armor", dec!(30));
        let catalog = vec![first, second];

        let mut item = armor_named(GameId::new(), "steel plate armor");
        item.unit_weight = Some(dec!(20));

        let result = resolve_enchanted(&item, &catalog, &[]);
        assert!(result.is_ok());
        let resolution = result.ok();
        let resolved = resolution.as_ref().map(|r| &r.item);
        assert_eq!(
            resolved.and_then(|i| i.name.as_deref()),
            Some("Steel Plate Armor")
        );
        assert_eq!(
            resolved.and_then(|i| i.weight_class),
            Some(WeightClass::HeavyArmor)
        );
        assert_eq!(
            resolved.and_then(|i| i.canonical_code.clone()),
            Some(ItemCode::new("00013952"))
        );
    }

    // --- Scenario B: ambiguity leaves the record untouched ---

    #[test]
    fn ambiguous_match_clears_reference_and_keeps_fields() {
        let catalog = vec![
            canonical_armor("00013952", "Steel Plate Armor", dec!(20)),
            canonical_armor("00013953", "Steel Plate Armor", dec!(20)),
        ];

        let mut item = armor_named(GameId::new(), "steel plate armor");
        item.unit_weight = Some(dec!(20));
        item.canonical_code = Some(ItemCode::new("00013952"));

        let result = resolve_enchanted(&item, &catalog, &[]);
        assert!(result.is_ok());
        let resolution = result.ok();
        assert_eq!(
            resolution.as_ref().map(|r| r.outcome.clone()),
            Some(Outcome::Ambiguous { candidates: 2 })
        );
        let resolved = resolution.as_ref().map(|r| &r.item);
        // Fields stay exactly as supplied -- no backfill on ambiguity.
        assert_eq!(
            resolved.and_then(|i| i.name.as_deref()),
            Some("steel plate armor")
        );
        assert_eq!(resolved.and_then(|i| i.canonical_code.clone()), None);
    }

    // --- Scenario C: no match is a hard validation failure ---

    #[test]
    fn identified_record_with_no_match_fails_validation() {
        let catalog = vec![canonical_armor("00013952", "Steel Plate Armor", dec!(20))];
        let item = armor_named(GameId::new(), "chitin armor");

        let result = resolve_enchanted(&item, &catalog, &[]);
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some(String::from(
                "doesn't match an armor item that exists in Skyrim"
            ))
        );
    }

    #[test]
    fn unidentified_record_with_no_match_stays_valid() {
        let item = Armor::new(GameId::new());
        let result = resolve_enchanted(&item, &[], &[]);
        assert!(result.is_ok());
        assert_eq!(
            result.ok().map(|r| r.outcome),
            Some(Outcome::Unidentified)
        );
    }

    // --- Scenarios D and E: the two enchantment compatibility modes ---

    #[test]
    fn non_enchantable_candidate_is_excluded_by_foreign_player_link() {
        let mut canonical = canonical_armor("000233E2", "Ancient Helmet", dec!(5));
        canonical.enchantable = false;
        canonical.enchantments = vec![CanonicalEnchantmentLink {
            enchantment_id: EnchantmentId::new(),
            strength: Some(dec!(10)),
        }];
        let catalog = vec![canonical];

        let mut item = armor_named(GameId::new(), "Ancient Helmet");
        item.unit_weight = Some(dec!(5));
        item.enchantments = vec![ItemEnchantmentLink::player(
            EnchantmentId::new(),
            Some(dec!(5)),
        )];

        // The only scalar match is rejected by the filter, so the save
        // fails as not-in-Skyrim.
        let result = resolve_enchanted(&item, &catalog, &[]);
        assert_eq!(
            result.err(),
            Some(ReconcileError::NoCanonicalMatch {
                noun: "an armor item"
            })
        );
    }

    #[test]
    fn enchantable_candidate_accepts_unrelated_player_link() {
        let canonical = canonical_armor("00013952", "Steel Plate Armor", dec!(20));
        let catalog = vec![canonical];

        let mut item = armor_named(GameId::new(), "Steel Plate Armor");
        item.enchantments = vec![ItemEnchantmentLink::player(
            EnchantmentId::new(),
            Some(dec!(3)),
        )];

        let result = resolve_enchanted(&item, &catalog, &[]);
        assert!(result.is_ok());
        assert!(result.ok().is_some_and(|r| r.outcome.is_matched()));
    }

    // --- Scenario F: the uniqueness guard ---

    #[test]
    fn second_claim_on_a_unique_item_fails() {
        let mut canonical = canonical_armor("000D2846", "Miraak's Robes", dec!(1));
        canonical.unique_item = true;
        let catalog = vec![canonical];

        let game = GameId::new();
        let holder = armor_named(game, "Miraak's Robes");
        let claims = vec![SiblingClaim::new(holder.id, ItemCode::new("000D2846"))];

        let item = armor_named(game, "miraak's robes");
        let result = resolve_enchanted(&item, &catalog, &claims);
        assert_eq!(result.err(), Some(ReconcileError::DuplicateUniqueItem));
    }

    #[test]
    fn resaving_the_unique_holder_does_not_self_conflict() {
        let mut canonical = canonical_armor("000D2846", "Miraak's Robes", dec!(1));
        canonical.unique_item = true;
        let catalog = vec![canonical];

        let item = armor_named(GameId::new(), "Miraak's Robes");
        let claims = vec![SiblingClaim::new(item.id, ItemCode::new("000D2846"))];
        let result = resolve_enchanted(&item, &catalog, &claims);
        assert!(result.is_ok());
    }

    // --- Wildcard superset property ---

    #[test]
    fn setting_more_fields_only_narrows_the_candidate_set() {
        let catalog = vec![
            canonical_armor("00013952", "Steel Plate Armor", dec!(20)),
            canonical_armor("00013953", "Steel Plate Armor", dec!(30)),
        ];

        let vague = armor_named(GameId::new(), "Steel Plate Armor");
        let vague_result = resolve_enchanted(&vague, &catalog, &[]);
        assert_eq!(
            vague_result.ok().map(|r| r.outcome),
            Some(Outcome::Ambiguous { candidates: 2 })
        );

        let mut refined = armor_named(GameId::new(), "Steel Plate Armor");
        refined.unit_weight = Some(dec!(30));
        let refined_result = resolve_enchanted(&refined, &catalog, &[]);
        assert_eq!(
            refined_result.ok().map(|r| r.outcome),
            Some(Outcome::Matched {
                key: ItemCode::new("00013953")
            })
        );
    }

    // --- Idempotence ---

    #[test]
    fn resolving_a_resolved_record_changes_nothing() {
        let mut canonical = canonical_armor("00013952", "Steel Plate Armor", dec!(20));
        canonical.enchantments = vec![CanonicalEnchantmentLink {
            enchantment_id: EnchantmentId::new(),
            strength: Some(dec!(25)),
        }];
        let catalog = vec![canonical];

        let item = armor_named(GameId::new(), "steel plate armor");
        let first = resolve_enchanted(&item, &catalog, &[]).ok();
        assert!(first.is_some());
        let first_item = first.as_ref().map(|r| r.item.clone());

        let second = first_item
            .as_ref()
            .and_then(|i| resolve_enchanted(i, &catalog, &[]).ok());
        assert_eq!(
            second.as_ref().map(|r| r.item.clone()),
            first_item,
        );
        assert!(second.is_some_and(|r| r.diff.is_empty()));
    }

    // --- Derived-link bookkeeping ---

    #[test]
    fn first_match_populates_derived_links_on_a_linkless_record() {
        let enchantment = EnchantmentId::new();
        let mut canonical = canonical_armor("00013952", "Steel Plate Armor", dec!(20));
        canonical.enchantments = vec![CanonicalEnchantmentLink {
            enchantment_id: enchantment,
            strength: Some(dec!(25)),
        }];
        let catalog = vec![canonical];

        let item = armor_named(GameId::new(), "steel plate armor");
        let result = resolve_enchanted(&item, &catalog, &[]).ok();
        let links = result.as_ref().map(|r| r.item.enchantments.clone());
        assert_eq!(
            links,
            Some(vec![ItemEnchantmentLink::derived(
                enchantment,
                Some(dec!(25))
            )])
        );
        assert_eq!(result.map(|r| r.diff.add.len()), Some(1));
    }

    #[test]
    fn first_match_skips_derivation_when_player_links_exist() {
        let enchantment = EnchantmentId::new();
        let mut canonical = canonical_armor("00013952", "Steel Plate Armor", dec!(20));
        canonical.enchantments = vec![CanonicalEnchantmentLink {
            enchantment_id: enchantment,
            strength: Some(dec!(25)),
        }];
        let catalog = vec![canonical];

        let mut item = armor_named(GameId::new(), "steel plate armor");
        item.enchantments = vec![ItemEnchantmentLink::player(enchantment, Some(dec!(25)))];

        let result = resolve_enchanted(&item, &catalog, &[]).ok();
        // The manually entered link is not doubled by a derived copy.
        assert_eq!(
            result.as_ref().map(|r| r.item.enchantments.len()),
            Some(1)
        );
        assert!(result.is_some_and(|r| r.diff.is_empty()));
    }

    #[test]
    fn rematch_replaces_the_derived_set_and_keeps_player_links() {
        let old_enchantment = EnchantmentId::new();
        let new_enchantment = EnchantmentId::new();
        let player_enchantment = EnchantmentId::new();

        let mut canonical = canonical_armor("00013953", "Steel Plate Armor", dec!(30));
        canonical.enchantments = vec![CanonicalEnchantmentLink {
            enchantment_id: new_enchantment,
            strength: Some(dec!(40)),
        }];
        let catalog = vec![canonical];

        let mut item = armor_named(GameId::new(), "Steel Plate Armor");
        item.unit_weight = Some(dec!(30));
        item.enchantments = vec![
            ItemEnchantmentLink::derived(old_enchantment, Some(dec!(25))),
            ItemEnchantmentLink::player(player_enchantment, Some(dec!(5))),
        ];

        let result = resolve_enchanted(&item, &catalog, &[]).ok();
        let links = result.as_ref().map(|r| r.item.enchantments.clone());
        assert_eq!(
            links,
            Some(vec![
                ItemEnchantmentLink::player(player_enchantment, Some(dec!(5))),
                ItemEnchantmentLink::derived(new_enchantment, Some(dec!(40))),
            ])
        );
        assert_eq!(
            result.as_ref().map(|r| r.diff.remove.clone()),
            Some(vec![ItemEnchantmentLink::derived(
                old_enchantment,
                Some(dec!(25))
            )])
        );
    }

    #[test]
    fn ambiguity_purges_derived_links_but_never_player_links() {
        let derived = EnchantmentId::new();
        let manual = EnchantmentId::new();
        let catalog = vec![
            canonical_armor("00013952", "Steel Plate Armor", dec!(20)),
            canonical_armor("00013953", "Steel Plate Armor", dec!(20)),
        ];

        let mut item = armor_named(GameId::new(), "Steel Plate Armor");
        item.unit_weight = Some(dec!(20));
        item.enchantments = vec![
            ItemEnchantmentLink::derived(derived, Some(dec!(25))),
            ItemEnchantmentLink::player(manual, Some(dec!(5))),
        ];

        let result = resolve_enchanted(&item, &catalog, &[]).ok();
        let links = result.as_ref().map(|r| r.item.enchantments.clone());
        assert_eq!(
            links,
            Some(vec![ItemEnchantmentLink::player(manual, Some(dec!(5)))])
        );
    }

    #[test]
    fn derived_links_always_belong_to_the_current_reference() {
        // Derived-link cleanliness: after any resolution, every
        // automatic link is in the resolved entry's inherent set, or the
        // record has no reference and no automatic links.
        let enchantment = EnchantmentId::new();
        let mut canonical = canonical_armor("00013952", "Steel Plate Armor", dec!(20));
        canonical.enchantments = vec![CanonicalEnchantmentLink {
            enchantment_id: enchantment,
            strength: Some(dec!(25)),
        }];
        let catalog = vec![canonical];

        let mut item = armor_named(GameId::new(), "Steel Plate Armor");
        item.enchantments = vec![ItemEnchantmentLink::derived(
            EnchantmentId::new(),
            Some(dec!(99)),
        )];

        let result = resolve_enchanted(&item, &catalog, &[]).ok();
        let resolved = result.map(|r| r.item);
        let stale_remaining = resolved.as_ref().is_some_and(|i| {
            i.enchantments
                .iter()
                .filter(|l| l.added_automatically)
                .any(|l| l.enchantment_id != enchantment)
        });
        assert!(!stale_remaining);
    }

    // --- Alchemical resolution ---

    #[test]
    fn alchemical_match_copies_priority_ranked_properties() {
        let restore = AlchemicalPropertyId::new();
        let fortify = AlchemicalPropertyId::new();
        let mut canonical = canonical_ingredient("0004DA25", "Blue Mountain Flower");
        canonical.alchemical_properties = vec![
            CanonicalAlchemicalLink {
                property_id: restore,
                strength: None,
                duration: None,
                priority: 1,
            },
            CanonicalAlchemicalLink {
                property_id: fortify,
                strength: Some(dec!(4)),
                duration: Some(dec!(60)),
                priority: 2,
            },
        ];
        let catalog = vec![canonical];

        let mut item = Ingredient::new(GameId::new());
        item.name = Some(String::from("blue mountain flower"));

        let result = resolve_alchemical(&item, &catalog, &[]).ok();
        assert_eq!(
            result.as_ref().map(|r| r.item.alchemical_properties.len()),
            Some(2)
        );
        assert_eq!(
            result.and_then(|r| r.item.name),
            Some(String::from("Blue Mountain Flower"))
        );
    }

    #[test]
    fn exact_mode_rejects_duration_mismatch_via_the_filter() {
        let property = AlchemicalPropertyId::new();
        let mut canonical = canonical_ingredient("0004DA25", "Blue Mountain Flower");
        canonical.alchemical_properties = vec![CanonicalAlchemicalLink {
            property_id: property,
            strength: Some(dec!(4)),
            duration: Some(dec!(60)),
            priority: 1,
        }];
        let catalog = vec![canonical];

        let mut item = Ingredient::new(GameId::new());
        item.name = Some(String::from("Blue Mountain Flower"));
        item.alchemical_properties = vec![skyhoard_types::ItemAlchemicalLink::player(
            property,
            Some(dec!(4)),
            None,
        )];

        let result = resolve_alchemical(&item, &catalog, &[]);
        assert_eq!(
            result.err(),
            Some(ReconcileError::NoCanonicalMatch {
                noun: "an ingredient"
            })
        );
    }

    // --- Properties: the single-entity case ---

    #[test]
    fn property_resolution_is_always_unique_per_game() {
        let canonical = CanonicalProperty {
            name: String::from("Breezehome"),
            hold: Hold::Whiterun,
            city: Some(String::from("Whiterun")),
            alchemy_lab_available: true,
            arcane_enchanter_available: false,
            forge_available: false,
        };
        let catalog = vec![canonical.clone()];

        let game = GameId::new();
        let mut mine = Property::new(game);
        mine.name = Some(String::from("breezehome"));
        let first = resolve(&mine, &catalog, &[]);
        assert!(first.is_ok());

        let claims = vec![SiblingClaim::new(mine.id, canonical.key())];
        let mut second = Property::new(game);
        second.name = Some(String::from("Breezehome"));
        let result = resolve(&second, &catalog, &claims);
        assert_eq!(result.err(), Some(ReconcileError::DuplicateUniqueItem));
    }
}
