//! Canonical reconciliation engine for the Skyhoard inventory tracker.
//!
//! Player records arrive partially specified ("some steel armor, weighs
//! 20"). This crate decides which canonical catalog entry -- if any --
//! such a record represents, backfills the authoritative attribute
//! values, and keeps the record's derived trait links consistent with
//! that determination, without ever touching data the player entered
//! by hand.
//!
//! # Architecture
//!
//! A save attempt flows through four stages, synchronously, over
//! already-fetched data:
//!
//! ```text
//! proposed record
//!   |
//!   +-- scalar matcher        (wildcard field comparison)     scalar.rs
//!   +-- trait compatibility   (player links vs inherent sets) compat.rs
//!   +-- disambiguation        (none / one / many)             resolve.rs
//!   +-- uniqueness guard      (one-of-a-kind per game)        unique.rs
//!   |
//!   resolution or validation failure
//! ```
//!
//! The engine is a pure function of catalog state plus record state: no
//! I/O, no async, no hidden triggers. Callers invoke it explicitly after
//! any mutation to identifying fields or player-entered trait links and
//! persist the returned record and link diff themselves (see the
//! `skyhoard-db` crate).
//!
//! Categories plug in through the descriptors in [`reconcile`]: every
//! category implements [`Reconcilable`], the enchantable four add
//! [`Enchanted`], and the alchemical two add [`Alchemical`].
//!
//! # Usage
//!
//! ```
//! use skyhoard_engine::resolve_enchanted;
//! use skyhoard_types::{Armor, CanonicalArmor, GameId, ItemCode};
//!
//! let catalog = vec![CanonicalArmor {
//!     code: ItemCode::new("00013952"),
//!     name: String::from("Steel Plate Armor"),
//!     weight_class: None,
//!     body_slot: None,
//!     unit_weight: None,
//!     magical_effects: None,
//!     enchantable: true,
//!     unique_item: false,
//!     quest_item: false,
//!     enchantments: Vec::new(),
//! }];
//!
//! let mut armor = Armor::new(GameId::new());
//! armor.name = Some(String::from("steel plate armor"));
//!
//! let resolution = resolve_enchanted(&armor, &catalog, &[]);
//! assert!(resolution.is_ok_and(|r| r.outcome.is_matched()));
//! ```

pub mod categories;
pub mod compat;
pub mod error;
pub mod reconcile;
pub mod resolve;
pub mod scalar;
pub mod unique;

// Re-export primary types at crate root.
pub use error::ReconcileError;
pub use reconcile::{Alchemical, Enchanted, Reconcilable};
pub use resolve::{LinkDiff, Outcome, Resolution, resolve, resolve_alchemical, resolve_enchanted};
pub use unique::SiblingClaim;
