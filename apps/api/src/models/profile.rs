//! Practice profiles and their competency records.
//!
//! The table is `'static` data; every `ProfileKey` resolves to exactly one
//! `ProfileRecord` and no key outside the enum can be constructed from input.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::AppError;

/// One of the three practice stages a student can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProfileKey {
    #[serde(rename = "1. praktik")]
    First,
    #[serde(rename = "2. praktik")]
    Second,
    #[serde(rename = "3. praktik")]
    Third,
}

/// Focus area, competency goal and candidate activities for a practice stage.
#[derive(Debug, PartialEq, Eq)]
pub struct ProfileRecord {
    pub focus_area: &'static str,
    pub competency_goal: &'static str,
    pub activities: &'static [&'static str],
}

/// Rendered activity suggestion plus the echoed profile label.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResult {
    pub suggestion: String,
    pub profile: ProfileKey,
}

impl ProfileKey {
    pub const ALL: [ProfileKey; 3] = [ProfileKey::First, ProfileKey::Second, ProfileKey::Third];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKey::First => "1. praktik",
            ProfileKey::Second => "2. praktik",
            ProfileKey::Third => "3. praktik",
        }
    }

    /// For a pinned activity index past the shortest activity list, the index it
    /// wraps to there. `None` when the index is in range for every profile.
    pub fn wrapped_activity_index(index: usize) -> Option<usize> {
        let shortest = ProfileKey::ALL
            .iter()
            .map(|key| key.record().activities.len())
            .min()
            .unwrap_or_default();
        (shortest > 0 && index >= shortest).then(|| index % shortest)
    }

    pub fn record(self) -> &'static ProfileRecord {
        match self {
            ProfileKey::First => &FIRST_PRACTICE,
            ProfileKey::Second => &SECOND_PRACTICE,
            ProfileKey::Third => &THIRD_PRACTICE,
        }
    }
}

impl FromStr for ProfileKey {
    type Err = AppError;

    /// Exact match on the label; anything else is `InvalidProfile`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(AppError::InvalidProfile)
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static FIRST_PRACTICE: ProfileRecord = ProfileRecord {
    focus_area: "Pædagogens praksis - grundlæggende pædagogiske aktiviteter",
    competency_goal: "Begrunde, tilrettelægge, gennemføre og evaluere pædagogiske aktiviteter",
    activities: &[
        "Observation af børns leg og interaktion med fokus på dokumentation",
        "Tilrettelæggelse af strukturerede aktiviteter med sundhedsfokus",
        "Evaluering af pædagogiske metoders effekt på børns læring",
        "Sundhedsfremmende aktiviteter omkring måltider og hygiejne",
        "Refleksion over egen læreproces og professionelle udvikling",
    ],
};

static SECOND_PRACTICE: ProfileRecord = ProfileRecord {
    focus_area: "Relation og kommunikation med børn og familier",
    competency_goal: "Skabe relationer og støtte børns kommunikative kompetencer",
    activities: &[
        "Relationsskabende aktiviteter med fokus på det enkelte barn",
        "Facilitering af børns kreative leg og æstetiske udfoldelse",
        "Kommunikationsøvelser og dialogbaserede aktiviteter",
        "Musiske og kropslige aktiviteter der styrker fællesskabet",
        "Differentierede pædagogiske tilgange til børn med særlige behov",
    ],
};

static THIRD_PRACTICE: ProfileRecord = ProfileRecord {
    focus_area: "Udvikling af pædagogisk praksis og innovation",
    competency_goal: "Målrettet tilrettelæggelse og udvikling af læreprocesser",
    activities: &[
        "Innovative pædagogiske projekter med børneinddragelse",
        "Tværfagligt samarbejde og videndeling med kolleger",
        "Systematisk dokumentation og evaluering af praksis",
        "Udvikling af det fysiske og sociale børnemiljø",
        "Forandringsprocesser med inddragelse af forældre og børn",
    ],
};
