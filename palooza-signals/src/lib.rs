//! Signal producers for the Pigeon Palooza rating engine.
//!
//! Every producer turns one kind of upstream evidence into a
//! [`palooza_core::RawSignal`] for [`palooza_core::compose`]:
//! - [`structured`] reads the JSON answer of a multimodal analysis service;
//! - [`annotations`] applies keyword heuristics to image-recognition labels;
//! - [`demo`] draws flattering random ratings when no backend is available.
//!
//! Producers never fail. Malformed input degrades to neutral or absent
//! fields and a logged warning, and the composer enforces all bounds.

#![forbid(unsafe_code)]

pub mod annotations;
pub mod demo;
pub mod rules;
pub mod structured;

pub use annotations::{Annotation, AnnotationSet, AnnotationSummary, from_annotations};
pub use demo::demo_signal;
pub use rules::{KeywordRule, RULES, RatingField};
pub use structured::{from_completion_envelope, from_structured_response, from_structured_text};
