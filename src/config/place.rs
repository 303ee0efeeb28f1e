//! Region identifier parsing
//!
//! Kept apart from interactive prompting so the fallback rule can be tested
//! without a terminal.

/// Region used when the supplied identifier is unusable
pub const DEFAULT_PLACE_ID: u64 = 1;

/// Outcome of interpreting user input as a region identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceSelection {
    /// The input was a positive integer
    Parsed(u64),
    /// The input was rejected and the default region is used instead
    Fallback { input: String, place_id: u64 },
}

impl PlaceSelection {
    pub fn place_id(&self) -> u64 {
        match self {
            PlaceSelection::Parsed(id) => *id,
            PlaceSelection::Fallback { place_id, .. } => *place_id,
        }
    }
}

/// Interprets `input` as a positive region identifier, falling back to
/// [`DEFAULT_PLACE_ID`] for anything else
pub fn parse_place_id(input: &str) -> PlaceSelection {
    match input.trim().parse::<u64>() {
        Ok(id) if id > 0 => PlaceSelection::Parsed(id),
        _ => PlaceSelection::Fallback {
            input: input.trim().to_string(),
            place_id: DEFAULT_PLACE_ID,
        },
    }
}
