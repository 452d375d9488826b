//! Region name normalization
//!
//! The upstream geocoding produces a zoo of spellings for Cyprus: sovereign
//! base areas, the self-declared northern entity, and UN buffer zone
//! variants. All of them collapse to the canonical `"Cyprus"` so the region
//! facet offers a single entry.

/// Lowercased country spellings that normalize to `"Cyprus"`
const CYPRUS_ALIASES: &[&str] = &[
    // Sovereign base areas / local variants
    "akrotiri",
    "dhekelia",
    "akrotiri sovereign base area",
    "dhekelia cantonment",
    // Abbreviations and short forms for northern cyprus
    "n.cyprus",
    "n. cyprus",
    "n cyprus",
    "north cyprus",
    "northern cyprus",
    "trnc",
    // Full and misspelled names of the self-declared entity
    "turkish republic of northern cyprus",
    "turkish republic of northen cyprus",
    // UN buffer zone variants
    "cyprus u.n. buffer",
    "cyprus un buffer",
    "cyprus u.n. buffer zone",
    "cyprus un buffer zone",
    "united nations buffer zone in cyprus",
    "united nations buffer zone",
    "u.n. buffer zone in cyprus",
    "u.n. buffer zone",
    "un buffer zone in cyprus",
    "un buffer zone",
];

/// Normalize a raw country value into the region facet's canonical form
///
/// Trims whitespace and collapses Cyprus variants; anything else passes
/// through trimmed but otherwise unchanged.
pub fn normalize_region(country: &str) -> String {
    let trimmed = country.trim();
    let lowered = trimmed.to_lowercase();
    if CYPRUS_ALIASES.contains(&lowered.as_str()) {
        "Cyprus".to_string()
    } else {
        trimmed.to_string()
    }
}
