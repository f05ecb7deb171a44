//! Landmark bonus table.
//!
//! Submissions name the landmark where the pigeon was photographed. Each
//! landmark carries a fixed integer bonus; names outside the table resolve to
//! the catch-all [`DEFAULT_LANDMARK`] entry, so lookups never fail.
//!
//! # Examples
//! ```
//! use palooza_core::landmark::{bonus_for, lookup};
//!
//! assert_eq!(bonus_for("Statue of Liberty"), 60);
//! assert_eq!(bonus_for("statue of liberty"), 10);
//! assert_eq!(lookup("Somewhere Else").name, "Other NYC Location");
//! ```

/// A named landmark and the bonus awarded for photographing a pigeon there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LandmarkEntry {
    /// Display name, matched exactly and case-sensitively.
    pub name: &'static str,
    /// Bonus points awarded for the landmark.
    pub bonus: u32,
}

/// Name of the catch-all entry used for unknown landmarks.
pub const DEFAULT_LANDMARK: &str = "Other NYC Location";

const DEFAULT_ENTRY: LandmarkEntry = LandmarkEntry {
    name: DEFAULT_LANDMARK,
    bonus: 10,
};

const LANDMARKS: [LandmarkEntry; 11] = [
    LandmarkEntry {
        name: "Empire State Building",
        bonus: 50,
    },
    LandmarkEntry {
        name: "Times Square",
        bonus: 45,
    },
    LandmarkEntry {
        name: "Brooklyn Bridge",
        bonus: 40,
    },
    LandmarkEntry {
        name: "Statue of Liberty",
        bonus: 60,
    },
    LandmarkEntry {
        name: "One World Trade Center",
        bonus: 45,
    },
    LandmarkEntry {
        name: "Central Park",
        bonus: 30,
    },
    LandmarkEntry {
        name: "High Line",
        bonus: 25,
    },
    LandmarkEntry {
        name: "Washington Square Park",
        bonus: 25,
    },
    LandmarkEntry {
        name: "Coney Island",
        bonus: 30,
    },
    LandmarkEntry {
        name: "9/11 Memorial",
        bonus: 40,
    },
    DEFAULT_ENTRY,
];

/// Return the full landmark table in display order.
#[must_use]
pub const fn landmarks() -> &'static [LandmarkEntry] {
    &LANDMARKS
}

/// Resolve a landmark by exact name, falling back to [`DEFAULT_LANDMARK`].
#[must_use]
pub fn lookup(name: &str) -> &'static LandmarkEntry {
    LANDMARKS
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or(&DEFAULT_ENTRY)
}

/// Return the bonus points for a landmark name.
#[must_use]
pub fn bonus_for(name: &str) -> u32 {
    lookup(name).bonus
}

/// Report whether `name` matches a table entry without fallback.
#[must_use]
pub fn is_known(name: &str) -> bool {
    LANDMARKS.iter().any(|entry| entry.name == name)
}
