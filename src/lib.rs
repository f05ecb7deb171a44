//! Facade crate for the Pigeon Palooza rating engine.
//!
//! This crate re-exports the core composition types and, behind the
//! `signals` feature, the signal producers.

#![forbid(unsafe_code)]

pub use palooza_core::{
    FALLBACK_DESCRIPTION, LandmarkEntry, RandomSource, Rating, RatingComposer, RatingRecord,
    RawSignal, RngSource, TABLES_VERSION, compose, description, landmark, leaderboard,
};

#[cfg(feature = "signals")]
pub use palooza_signals::{
    Annotation, AnnotationSet, demo_signal, from_annotations, from_completion_envelope,
    from_structured_response, from_structured_text,
};
