//! Signals from a structured analysis response.
//!
//! The multimodal analysis service is asked for a JSON object shaped like
//! `{ "attitudeRating", "strutRating", "touristJudgingRating",
//! "funDescription" }`. Nothing about the reply is trusted: ratings may be
//! missing, fractional, negative or not numbers at all. This module maps
//! whatever arrives onto a [`RawSignal`] without failing; range checks are
//! left to the composer.

use palooza_core::{Rating, RawSignal};
use serde_json::{Map, Value};

const ATTITUDE_FIELD: &str = "attitudeRating";
const STRUT_FIELD: &str = "strutRating";
const JUDGING_FIELD: &str = "touristJudgingRating";
const DESCRIPTION_FIELD: &str = "funDescription";

/// Build a signal from a parsed structured response.
///
/// Each rating is passed through unchanged when it is a JSON number;
/// fractional numbers are rounded half away from zero and values beyond the
/// `i64` range saturate. Missing or non-numeric ratings become the neutral
/// `3`. `funDescription` is kept verbatim when it is a string.
///
/// A payload that is not a JSON object yields [`RawSignal::absent`].
///
/// # Examples
/// ```
/// use palooza_signals::from_structured_response;
/// use serde_json::json;
///
/// let signal = from_structured_response(&json!({
///     "attitudeRating": 9,
///     "funDescription": "Just chilling",
/// }));
/// assert_eq!(signal.attitude, Some(9));
/// assert_eq!(signal.strut, Some(3));
/// assert_eq!(signal.description.as_deref(), Some("Just chilling"));
/// ```
#[must_use]
pub fn from_structured_response(payload: &Value) -> RawSignal {
    let Some(object) = payload.as_object() else {
        log::warn!("structured response is not a JSON object; treating the signal as absent");
        return RawSignal::absent();
    };
    RawSignal {
        attitude: Some(rating_field(object, ATTITUDE_FIELD)),
        strut: Some(rating_field(object, STRUT_FIELD)),
        judging: Some(rating_field(object, JUDGING_FIELD)),
        description: object
            .get(DESCRIPTION_FIELD)
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

/// Parse raw response text and build a signal from it.
///
/// Text that is not valid JSON yields [`RawSignal::absent`] rather than an
/// error, so composition can still fall back to neutral defaults.
///
/// # Examples
/// ```
/// use palooza_signals::from_structured_text;
///
/// assert!(from_structured_text("the model said no").is_absent());
/// assert_eq!(from_structured_text(r#"{"strutRating": 2}"#).strut, Some(2));
/// ```
#[must_use]
pub fn from_structured_text(text: &str) -> RawSignal {
    match serde_json::from_str::<Value>(text) {
        Ok(payload) => from_structured_response(&payload),
        Err(err) => {
            log::warn!("structured response is not valid JSON ({err}); treating the signal as absent");
            RawSignal::absent()
        }
    }
}

/// Build a signal from a chat-completion envelope.
///
/// The analysis service wraps its JSON answer as a string in
/// `choices[0].message.content`. A missing or empty answer is read as an
/// empty object, which gives neutral ratings and no description.
#[must_use]
pub fn from_completion_envelope(envelope: &Value) -> RawSignal {
    let content = envelope
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("{}");
    from_structured_text(content)
}

fn rating_field(object: &Map<String, Value>, field: &str) -> i64 {
    object
        .get(field)
        .and_then(interpret_rating_value)
        .unwrap_or_else(|| Rating::NEUTRAL.as_i64())
}

fn interpret_rating_value(value: &Value) -> Option<i64> {
    if let Some(integer) = value.as_i64() {
        return Some(integer);
    }
    if let Some(unsigned) = value.as_u64() {
        return Some(i64::try_from(unsigned).unwrap_or(i64::MAX));
    }
    value
        .as_f64()
        .filter(|number| number.is_finite())
        .map(round_to_i64)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` casts saturate, which is the intended behaviour"
)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}
