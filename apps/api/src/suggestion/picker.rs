//! Activity picker — pluggable source of the activity drawn for a suggestion.
//!
//! Default: `UniformPicker` (uniform draw from the thread RNG).
//! Tests: `FixedPicker` pins the draw so rendered text can be asserted exactly.
//!
//! `AppState` holds an `Arc<dyn ActivityPicker>`, chosen at startup.

use rand::seq::SliceRandom;

/// Chooses one activity out of a profile's non-empty activity list.
pub trait ActivityPicker: Send + Sync {
    fn pick<'a>(&self, activities: &[&'a str]) -> &'a str;
}

/// Uniform random choice. Repeated calls may return different activities.
pub struct UniformPicker;

impl ActivityPicker for UniformPicker {
    fn pick<'a>(&self, activities: &[&'a str]) -> &'a str {
        activities
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }
}

/// Always picks the activity at `index`, wrapping around the list length.
pub struct FixedPicker(pub usize);

impl ActivityPicker for FixedPicker {
    fn pick<'a>(&self, activities: &[&'a str]) -> &'a str {
        if activities.is_empty() {
            return "";
        }
        activities[self.0 % activities.len()]
    }
}
