//! Static body-location reference list.
//!
//! Offered as suggestions for the body-location question; each entry carries
//! a short explanation shown alongside the suggestion.

/// A suggested place in the body where emotions are commonly felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLocation {
    pub name: &'static str,
    pub description: &'static str,
}

impl BodyLocation {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// The canonical ordered body-location list.
pub const BODY_LOCATIONS: &[BodyLocation] = &[
    BodyLocation::new("Chest/Heart area", "Center of emotional feelings, often associated with love, grief, or anxiety"),
    BodyLocation::new("Stomach/Gut", "Often referred to as our 'second brain', associated with intuition and basic emotions"),
    BodyLocation::new("Throat", "Related to expression, communication, and speaking your truth"),
    BodyLocation::new("Head/Temples", "Associated with thoughts, beliefs, and overthinking"),
    BodyLocation::new("Shoulders/Upper back", "Common place to hold stress, responsibility, and burden"),
    BodyLocation::new("Jaw/Face", "Often holds tension related to unexpressed words or emotions"),
    BodyLocation::new("Hands", "Connected to our ability to create, give, and receive"),
    BodyLocation::new("Legs", "Related to support, movement forward, and stability"),
    BodyLocation::new("Around the body", "Energy or sensation felt outside the physical body"),
    BodyLocation::new("Lower back", "Often associated with feeling unsupported or financial stress"),
    BodyLocation::new("Neck", "Flexibility, stubbornness, or resistance to change"),
    BodyLocation::new("Eyes", "Related to how we see ourselves and the world"),
    BodyLocation::new("Entire body", "Full-body sensations that cannot be localized"),];
