// ABOUTME: Closed anatomical vocabulary for pain and injury tracking
// ABOUTME: Body regions, named body locations and side-qualified locations with display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Coarse anatomical grouping used to weight and deduplicate pain entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    /// Ankle joint
    Ankle,
    /// Upper and lower arm
    Arm,
    /// Upper and lower back
    Back,
    /// Chest
    Chest,
    /// Abdominals and obliques
    Core,
    /// Foot, heel and toes
    Foot,
    /// Posterior thigh
    Hamstring,
    /// Hip, glutes and groin
    Hip,
    /// Knee joint and tendons
    Knee,
    /// Calf, shin and achilles
    LowerLeg,
    /// Neck
    Neck,
    /// Anterior and lateral thigh
    Quad,
    /// Shoulder
    Shoulder,
}

impl BodyRegion {
    /// Every region
    pub const ALL: [Self; 13] = [
        Self::Ankle,
        Self::Arm,
        Self::Back,
        Self::Chest,
        Self::Core,
        Self::Foot,
        Self::Hamstring,
        Self::Hip,
        Self::Knee,
        Self::LowerLeg,
        Self::Neck,
        Self::Quad,
        Self::Shoulder,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ankle => "Ankle",
            Self::Arm => "Arm",
            Self::Back => "Back",
            Self::Chest => "Chest",
            Self::Core => "Core",
            Self::Foot => "Foot",
            Self::Hamstring => "Hamstring",
            Self::Hip => "Hip",
            Self::Knee => "Knee",
            Self::LowerLeg => "Lower Leg",
            Self::Neck => "Neck",
            Self::Quad => "Quad",
            Self::Shoulder => "Shoulder",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named anatomical location, tagged with its region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLocation {
    /// Achilles tendon
    AchillesTendon,
    /// Ankle
    Ankle,
    /// Bicep
    Bicep,
    /// Calf
    Calf,
    /// Chest
    Chest,
    /// Core
    Core,
    /// Elbow
    Elbow,
    /// Foot
    Foot,
    /// Foot metatarsals
    FootMetatarsals,
    /// Forearm
    Forearm,
    /// Glute
    Glute,
    /// Groin
    Groin,
    /// Hamstring
    Hamstring,
    /// Heel
    Heel,
    /// Hip
    Hip,
    /// Hip flexor
    HipFlexor,
    /// Iliotibial band
    ItBand,
    /// Knee
    Knee,
    /// Latissimus dorsi
    Lat,
    /// Lower back
    LowerBack,
    /// Lower core
    LowerCore,
    /// Neck
    Neck,
    /// Obliques
    Obliques,
    /// Patellar tendon
    PatellarTendon,
    /// Plantar fascia
    Plantar,
    /// Quad
    Quad,
    /// Shin
    Shin,
    /// Shoulder
    Shoulder,
    /// Toes
    Toes,
    /// Tricep
    Tricep,
    /// Upper back
    UpperBack,
    /// Wrist
    Wrist,
}

impl BodyLocation {
    /// Every declared location
    pub const ALL: [Self; 32] = [
        Self::AchillesTendon,
        Self::Ankle,
        Self::Bicep,
        Self::Calf,
        Self::Chest,
        Self::Core,
        Self::Elbow,
        Self::Foot,
        Self::FootMetatarsals,
        Self::Forearm,
        Self::Glute,
        Self::Groin,
        Self::Hamstring,
        Self::Heel,
        Self::Hip,
        Self::HipFlexor,
        Self::ItBand,
        Self::Knee,
        Self::Lat,
        Self::LowerBack,
        Self::LowerCore,
        Self::Neck,
        Self::Obliques,
        Self::PatellarTendon,
        Self::Plantar,
        Self::Quad,
        Self::Shin,
        Self::Shoulder,
        Self::Toes,
        Self::Tricep,
        Self::UpperBack,
        Self::Wrist,
    ];

    /// Display name, also the canonical lookup key (case-insensitive)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AchillesTendon => "Achilles Tendon",
            Self::Ankle => "Ankle",
            Self::Bicep => "Bicep",
            Self::Calf => "Calf",
            Self::Chest => "Chest",
            Self::Core => "Core",
            Self::Elbow => "Elbow",
            Self::Foot => "Foot",
            Self::FootMetatarsals => "Foot Metatarsals",
            Self::Forearm => "Forearm",
            Self::Glute => "Glute",
            Self::Groin => "Groin",
            Self::Hamstring => "Hamstring",
            Self::Heel => "Heel",
            Self::Hip => "Hip",
            Self::HipFlexor => "Hip Flexor",
            Self::ItBand => "IT Band",
            Self::Knee => "Knee",
            Self::Lat => "Lat",
            Self::LowerBack => "Lower Back",
            Self::LowerCore => "Lower Core",
            Self::Neck => "Neck",
            Self::Obliques => "Obliques",
            Self::PatellarTendon => "Patellar Tendon",
            Self::Plantar => "Plantar",
            Self::Quad => "Quad",
            Self::Shin => "Shin",
            Self::Shoulder => "Shoulder",
            Self::Toes => "Toes",
            Self::Tricep => "Tricep",
            Self::UpperBack => "Upper Back",
            Self::Wrist => "Wrist",
        }
    }

    /// Region this location belongs to
    #[must_use]
    pub const fn region(self) -> BodyRegion {
        match self {
            Self::Ankle => BodyRegion::Ankle,
            Self::Bicep | Self::Elbow | Self::Forearm | Self::Tricep | Self::Wrist => {
                BodyRegion::Arm
            }
            Self::Lat | Self::LowerBack | Self::UpperBack => BodyRegion::Back,
            Self::Chest => BodyRegion::Chest,
            Self::Core | Self::LowerCore | Self::Obliques => BodyRegion::Core,
            Self::Foot | Self::FootMetatarsals | Self::Heel | Self::Plantar | Self::Toes => {
                BodyRegion::Foot
            }
            Self::Hamstring => BodyRegion::Hamstring,
            Self::Glute | Self::Groin | Self::Hip | Self::HipFlexor => BodyRegion::Hip,
            Self::Knee | Self::PatellarTendon => BodyRegion::Knee,
            Self::AchillesTendon | Self::Calf | Self::Shin => BodyRegion::LowerLeg,
            Self::Neck => BodyRegion::Neck,
            Self::ItBand | Self::Quad => BodyRegion::Quad,
            Self::Shoulder => BodyRegion::Shoulder,
        }
    }
}

/// Informal phrasings seen in pain logs
const ALIASES: &[(&str, BodyLocation)] = &[
    ("achilles", BodyLocation::AchillesTendon),
    ("achilles tendons", BodyLocation::AchillesTendon),
    ("calves", BodyLocation::Calf),
    ("feet", BodyLocation::Foot),
    ("quads", BodyLocation::Quad),
    ("quadricep", BodyLocation::Quad),
    ("hamstrings", BodyLocation::Hamstring),
    ("hammy", BodyLocation::Hamstring),
    ("glutes", BodyLocation::Glute),
    ("butt", BodyLocation::Glute),
    ("knees", BodyLocation::Knee),
    ("shins", BodyLocation::Shin),
    ("shin splints", BodyLocation::Shin),
    ("ankles", BodyLocation::Ankle),
    ("hips", BodyLocation::Hip),
    ("hip flexors", BodyLocation::HipFlexor),
    ("itb", BodyLocation::ItBand),
    ("it-band", BodyLocation::ItBand),
    ("plantar fascia", BodyLocation::Plantar),
    ("plantar fasciitis", BodyLocation::Plantar),
    ("metatarsals", BodyLocation::FootMetatarsals),
    ("metatarsal", BodyLocation::FootMetatarsals),
    ("toe", BodyLocation::Toes),
    ("big toe", BodyLocation::Toes),
    ("lats", BodyLocation::Lat),
    ("abs", BodyLocation::Core),
    ("oblique", BodyLocation::Obliques),
    ("patella tendon", BodyLocation::PatellarTendon),
    ("patella", BodyLocation::PatellarTendon),
    ("heels", BodyLocation::Heel),
    ("shoulders", BodyLocation::Shoulder),
    ("triceps", BodyLocation::Tricep),
    ("biceps", BodyLocation::Bicep),
    ("elbows", BodyLocation::Elbow),
    ("wrists", BodyLocation::Wrist),
    ("forearms", BodyLocation::Forearm),
];

static BY_NAME: LazyLock<HashMap<String, BodyLocation>> = LazyLock::new(|| {
    let canonical = BodyLocation::ALL
        .iter()
        .map(|location| (location.name().to_lowercase(), *location));
    let aliases = ALIASES
        .iter()
        .map(|(alias, location)| ((*alias).to_owned(), *location));
    canonical.chain(aliases).collect()
});

impl BodyLocation {
    /// Resolve a side-free phrase, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_name(phrase: &str) -> Option<Self> {
        BY_NAME.get(&phrase.trim().to_lowercase()).copied()
    }
}

impl fmt::Display for BodyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Left/right qualifier for a body location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Left side
    Left,
    /// Right side
    Right,
    /// Midline or unspecified
    None,
}

/// A body location together with its side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyLocationWithSide {
    /// Named location
    pub location: BodyLocation,
    /// Side qualifier
    pub side: Side,
}

impl BodyLocationWithSide {
    /// Pair a location with a side
    #[must_use]
    pub const fn new(location: BodyLocation, side: Side) -> Self {
        Self { location, side }
    }

    /// Region of the underlying location
    #[must_use]
    pub const fn region(&self) -> BodyRegion {
        self.location.region()
    }
}

impl fmt::Display for BodyLocationWithSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Left => write!(f, "Left {}", self.location),
            Side::Right => write!(f, "Right {}", self.location),
            Side::None => write!(f, "{}", self.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_with_side() {
        let location = BodyLocationWithSide::new(BodyLocation::FootMetatarsals, Side::Right);
        assert_eq!(location.to_string(), "Right Foot Metatarsals");
        let midline = BodyLocationWithSide::new(BodyLocation::LowerBack, Side::None);
        assert_eq!(midline.to_string(), "Lower Back");
    }

    #[test]
    fn test_structural_equality() {
        let a = BodyLocationWithSide::new(BodyLocation::Knee, Side::Left);
        let b = BodyLocationWithSide::new(BodyLocation::Knee, Side::Left);
        let c = BodyLocationWithSide::new(BodyLocation::Knee, Side::Right);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<String> = BodyLocation::ALL
            .iter()
            .map(|l| l.name().to_lowercase())
            .collect();
        assert_eq!(names.len(), BodyLocation::ALL.len());
    }

    #[test]
    fn test_from_name_and_aliases() {
        assert_eq!(
            BodyLocation::from_name("Foot Metatarsals"),
            Some(BodyLocation::FootMetatarsals)
        );
        assert_eq!(
            BodyLocation::from_name("achilles"),
            Some(BodyLocation::AchillesTendon)
        );
        assert_eq!(BodyLocation::from_name("Calves"), Some(BodyLocation::Calf));
        assert_eq!(BodyLocation::from_name("elbow pit"), None);
    }

    #[test]
    fn test_every_region_is_used() {
        let used: HashSet<BodyRegion> = BodyLocation::ALL.iter().map(|l| l.region()).collect();
        assert_eq!(used.len(), BodyRegion::ALL.len());
    }
}
