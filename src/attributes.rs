// src/attributes.rs
//! Column vocabulary of the Staff Search export.
//!
//! Attribute columns are numeric ratings (conventionally 1..=20, but nothing
//! here relies on that range). Everything else is carried as text.

/// Every attribute code the export can contain, in export order.
pub const ATTRIBUTES: &[&str] = &[
    "Ada", "Att", "Def", "Det", "Fit", "GkD", "GkH", "GkS", "Judge A", "Jud PD", "Judge P",
    "Jud SA", "Jud TD", "Dis", "Man", "Men", "Mot", "Negotiating", "Phy", "Prs D", "SpS", "TCo",
    "Tac Knw", "Tec", "Youth",
];

pub const NAME: &str = "Name";

/// Free-text fields passed through untouched.
pub const PREFERRED_FORMATION: &str = "Preferred Formation";
pub const TACTICAL_STYLE: &str = "Tactical Style";
pub const PERSONALITY: &str = "Personality";

pub fn is_attribute(header: &str) -> bool {
    ATTRIBUTES.contains(&header)
}
