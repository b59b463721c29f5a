//! Static texture suggestion list for the texture question.

/// Common texture descriptions, in display order.
pub const TEXTURES: &[&str] = &[
    "Rough", "Smooth", "Sticky", "Slimy", "Sharp", "Soft", "Hard", "Heavy", "Light", "Prickly",
    "Fuzzy", "Cold", "Hot", "Hollow", "Dense", "Liquid", "Solid", "Airy",
];
