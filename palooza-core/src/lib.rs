//! Core rating engine for Pigeon Palooza.
//!
//! The crate turns untrusted rating signals into bounded, reproducible
//! [`RatingRecord`]s. It owns the static tables every signal path shares:
//! - [`landmark`]: the landmark bonus table with its catch-all default;
//! - [`description`]: the description template pool and on-theme check.
//!
//! [`compose`] is the single entry point that clamps sub-ratings, blends
//! them with the landmark bonus and synthesises the description. All
//! randomness flows through an injected [`RandomSource`], so seeded sources
//! give identical records for identical inputs.
//!
//! # Examples
//! ```
//! use palooza_core::{RawSignal, Rating, RngSource, compose};
//!
//! let mut rng = RngSource::seeded(42);
//! let signal = RawSignal::with_ratings(-2, 8, 3);
//! let record = compose(&signal, "Central Park", &mut rng);
//! assert_eq!(record.attitude_rating(), Rating::MIN);
//! assert_eq!(record.strut_rating(), Rating::MAX);
//! assert_eq!(record.overall_score(), 3.3);
//! assert_eq!(record.bonus_points(), 30);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod composer;
pub mod description;
pub mod landmark;
pub mod leaderboard;
pub mod random;
mod rating;
mod record;
mod signal;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use composer::{RatingComposer, compose};
pub use landmark::LandmarkEntry;
pub use random::{RandomSource, RngSource};
pub use rating::Rating;
pub use record::{FALLBACK_DESCRIPTION, RatingRecord};
pub use signal::RawSignal;

/// Version of the shared landmark and template tables.
///
/// Bump whenever an entry in [`landmark`] or [`description::TEMPLATES`]
/// changes, so stored records can be traced to the tables that produced them.
pub const TABLES_VERSION: u32 = 1;
