//! Description synthesis.
//!
//! A candidate description is kept only when it already sounds like New
//! York. Anything else, including a missing candidate, is replaced by one of
//! the shared [`TEMPLATES`] with the landmark substituted in.

use crate::RandomSource;

/// Placeholder replaced by the landmark name in every template.
pub const PLACEHOLDER: &str = "{landmark}";

/// Shared pool of description templates.
///
/// Each template contains [`PLACEHOLDER`] exactly once.
pub const TEMPLATES: [&str; 8] = [
    "This pigeon's got that classic {landmark} swagger - definitely born and raised in the five boroughs!",
    "Spotted this absolute unit strutting around {landmark} like they own the place. Respect!",
    "This bird's giving major NYC energy at {landmark} - probably judges tourists better than any Yelp review.",
    "Pure Brooklyn attitude on display at {landmark}. This pigeon's seen some things and ain't impressed.",
    "This feathered New Yorker at {landmark} is serving looks and attitude in equal measure.",
    "Straight outta {landmark}, this pigeon's got more street cred than most subway musicians.",
    "This bird at {landmark} is giving off serious 'I've been here since the 90s' vibes.",
    "Caught this pigeon at {landmark} throwing shade at tourists - peak NYC behavior right here!",
];

const THEME_MARKERS: [&str; 2] = ["NYC", "New York"];

/// Report whether a candidate description is on-theme.
///
/// The check is a case-sensitive substring test for `NYC` or `New York`.
///
/// # Examples
/// ```
/// use palooza_core::description::is_on_theme;
///
/// assert!(is_on_theme("Peak NYC behaviour"));
/// assert!(!is_on_theme("peak nyc behaviour"));
/// ```
#[must_use]
pub fn is_on_theme(candidate: &str) -> bool {
    THEME_MARKERS
        .iter()
        .any(|marker| candidate.contains(marker))
}

/// Render template `index` with `subject` substituted for the placeholder.
///
/// Out-of-range indices fall back to the first template.
#[must_use]
pub fn render_template(index: usize, subject: &str) -> String {
    let template = TEMPLATES.get(index).copied().unwrap_or(TEMPLATES[0]);
    template.replacen(PLACEHOLDER, subject, 1)
}

/// Produce the final description for a submission.
///
/// On-theme candidates are returned verbatim. Otherwise a template is chosen
/// uniformly at random and `subject` is substituted into it; no text from
/// the discarded candidate is kept.
///
/// # Examples
/// ```
/// use palooza_core::{RngSource, description::synthesize};
///
/// let mut rng = RngSource::seeded(3);
/// let kept = synthesize(Some("A true New York legend"), "High Line", &mut rng);
/// assert_eq!(kept, "A true New York legend");
///
/// let templated = synthesize(Some("Just chilling"), "High Line", &mut rng);
/// assert!(templated.contains("High Line"));
/// ```
pub fn synthesize(candidate: Option<&str>, subject: &str, rng: &mut dyn RandomSource) -> String {
    match candidate {
        Some(text) if is_on_theme(text) => text.to_owned(),
        _ => render_template(rng.index(TEMPLATES.len()), subject),
    }
}
