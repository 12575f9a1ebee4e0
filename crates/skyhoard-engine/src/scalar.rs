//! Wildcard scalar comparison: the field-by-field test deciding whether a
//! player record could be a given canonical entry.
//!
//! The rule is asymmetric. An unset field on the *item* side constrains
//! nothing -- the player simply hasn't said. An unset field on the
//! *canonical* side is a real absence: if the player claims a value for
//! it, the entry cannot be the one they mean. No field is ever "must be
//! null".
//!
//! Text compares case-insensitively (players type "steel plate armor",
//! the catalog says "Steel Plate Armor"); closed-set and numeric fields
//! compare exactly.
//!
//! These helpers are distinct from trait-link comparison
//! ([`crate::compat`]), where `None` is a concrete value that matches
//! only `None`. The two must never be unified.

/// Compare an optional item-side text field against a canonical text
/// field, case-insensitively.
///
/// `None` on the item side matches anything; a set item value requires a
/// set, equal (ignoring ASCII case) canonical value.
pub fn text_matches(item: Option<&str>, canonical: Option<&str>) -> bool {
    match item {
        None => true,
        Some(value) => canonical.is_some_and(|c| c.eq_ignore_ascii_case(value)),
    }
}

/// Compare an item-side text field against a canonical primary value plus
/// an alias list.
///
/// Used for book titles, where the catalog records the variant titles a
/// volume has been published under. A set item value matches if it equals
/// the primary value or any variant, ignoring ASCII case.
pub fn text_matches_any(item: Option<&str>, canonical: Option<&str>, variants: &[String]) -> bool {
    match item {
        None => true,
        Some(value) => {
            canonical.is_some_and(|c| c.eq_ignore_ascii_case(value))
                || variants.iter().any(|v| v.eq_ignore_ascii_case(value))
        }
    }
}

/// Compare an optional item-side value against a canonical value exactly.
///
/// Covers numeric, boolean, and closed-set (enum) fields. `None` on the
/// item side matches anything; a set item value requires a set, equal
/// canonical value.
pub fn value_matches<T: PartialEq>(item: Option<T>, canonical: Option<T>) -> bool {
    match item {
        None => true,
        Some(value) => canonical.is_some_and(|c| c == value),
    }
}
