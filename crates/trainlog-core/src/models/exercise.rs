// ABOUTME: Closed exercise vocabulary for strength and conditioning logs
// ABOUTME: Exercise enum, display names and how each exercise is measured (load, distance, hold)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// How a set of an exercise is quantified for tonnage purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseMeasure {
    /// Reps at a load (plus synthetic bodyweight load for some movements)
    Load,
    /// Load carried over a distance
    Distance,
    /// Position held for a duration
    HeldDuration,
}

/// Every exercise the lift parsers accept
///
/// Adding a variant also requires a name in `name()` (and any historical
/// spellings in the alias table), otherwise logs that mention it fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    /// Squat
    Squat,
    /// Front Squat
    FrontSquat,
    /// Goblet Squat
    GobletSquat,
    /// Oxidative Squat
    OxidativeSquat,
    /// Bulgarian Split Squat
    BulgarianSplitSquat,
    /// Lunge
    Lunge,
    /// Reverse Lunge
    ReverseLunge,
    /// Step Up
    StepUp,
    /// Deadlift
    Deadlift,
    /// Romanian Deadlift
    RomanianDeadlift,
    /// Single Leg Deadlift
    SingleLegDeadlift,
    /// Hip Thrust
    HipThrust,
    /// Glute Bridge
    GluteBridge,
    /// Single Leg Glute Bridge
    SingleLegGluteBridge,
    /// Leg Press
    LegPress,
    /// Leg Curl
    LegCurl,
    /// Leg Extension
    LegExtension,
    /// Nordic Curl
    NordicCurl,
    /// Hip Abduction
    HipAbduction,
    /// Clamshell
    Clamshell,
    /// Monster Walk
    MonsterWalk,
    /// Calf Raise
    CalfRaise,
    /// Single Leg Calf Raise
    SingleLegCalfRaise,
    /// Single Leg Stair Calf Raise
    SingleLegStairCalfRaise,
    /// Tib Raise
    TibRaise,
    /// Short Foot Exercise
    ShortFootExercise,
    /// Bench
    Bench,
    /// Incline Bench
    InclineBench,
    /// Dumbbell Bench
    DumbbellBench,
    /// Overhead Press
    OverheadPress,
    /// Dumbbell Overhead Press
    DumbbellOverheadPress,
    /// Lateral Raise
    LateralRaise,
    /// Face Pull
    FacePull,
    /// Shrug
    Shrug,
    /// Row
    Row,
    /// Dumbbell Row
    DumbbellRow,
    /// Pullup
    Pullup,
    /// Chin Up
    ChinUp,
    /// Lat Pulldown
    LatPulldown,
    /// Bicep Curl
    BicepCurl,
    /// Hammer Curl
    HammerCurl,
    /// Tricep Extension
    TricepExtension,
    /// Tricep Dip
    TricepDip,
    /// Pushup
    Pushup,
    /// Situp
    Situp,
    /// Crunch
    Crunch,
    /// Dead Bugs
    DeadBugs,
    /// Bird Dog
    BirdDog,
    /// Rush N Twist
    RushNTwist,
    /// 45 Degree Back Extension
    FourtyFiveDegreeBackExtension,
    /// Lemon Squeezers
    LemonSqueezers,
    /// Supine Knee Drive
    SupineKneeDrive,
    /// One Leg Buck
    OneLegBuck,
    /// Kettlebell Swing
    KettlebellSwing,
    /// Box Jump
    BoxJump,
    /// Speed Skater Jumps
    SpeedSkaterJumps,
    /// Plank
    Plank,
    /// Side Plank
    SidePlank,
    /// Copenhagen Plank
    CopenhagenPlank,
    /// Hollow Hold
    HollowHold,
    /// Dead Hang
    DeadHang,
    /// Wall Sit
    WallSit,
    /// Farmer Carry
    FarmerCarry,
    /// Suitcase Carry
    SuitcaseCarry,
    /// Sled Push
    SledPush,
}

impl Exercise {
    /// Every exercise, in declaration order
    pub const ALL: [Self; 65] = [
        Self::Squat,
        Self::FrontSquat,
        Self::GobletSquat,
        Self::OxidativeSquat,
        Self::BulgarianSplitSquat,
        Self::Lunge,
        Self::ReverseLunge,
        Self::StepUp,
        Self::Deadlift,
        Self::RomanianDeadlift,
        Self::SingleLegDeadlift,
        Self::HipThrust,
        Self::GluteBridge,
        Self::SingleLegGluteBridge,
        Self::LegPress,
        Self::LegCurl,
        Self::LegExtension,
        Self::NordicCurl,
        Self::HipAbduction,
        Self::Clamshell,
        Self::MonsterWalk,
        Self::CalfRaise,
        Self::SingleLegCalfRaise,
        Self::SingleLegStairCalfRaise,
        Self::TibRaise,
        Self::ShortFootExercise,
        Self::Bench,
        Self::InclineBench,
        Self::DumbbellBench,
        Self::OverheadPress,
        Self::DumbbellOverheadPress,
        Self::LateralRaise,
        Self::FacePull,
        Self::Shrug,
        Self::Row,
        Self::DumbbellRow,
        Self::Pullup,
        Self::ChinUp,
        Self::LatPulldown,
        Self::BicepCurl,
        Self::HammerCurl,
        Self::TricepExtension,
        Self::TricepDip,
        Self::Pushup,
        Self::Situp,
        Self::Crunch,
        Self::DeadBugs,
        Self::BirdDog,
        Self::RushNTwist,
        Self::FourtyFiveDegreeBackExtension,
        Self::LemonSqueezers,
        Self::SupineKneeDrive,
        Self::OneLegBuck,
        Self::KettlebellSwing,
        Self::BoxJump,
        Self::SpeedSkaterJumps,
        Self::Plank,
        Self::SidePlank,
        Self::CopenhagenPlank,
        Self::HollowHold,
        Self::DeadHang,
        Self::WallSit,
        Self::FarmerCarry,
        Self::SuitcaseCarry,
        Self::SledPush,
    ];

    /// Display name, also the canonical lookup key (case-insensitive)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::FrontSquat => "Front Squat",
            Self::GobletSquat => "Goblet Squat",
            Self::OxidativeSquat => "Oxidative Squat",
            Self::BulgarianSplitSquat => "Bulgarian Split Squat",
            Self::Lunge => "Lunge",
            Self::ReverseLunge => "Reverse Lunge",
            Self::StepUp => "Step Up",
            Self::Deadlift => "Deadlift",
            Self::RomanianDeadlift => "Romanian Deadlift",
            Self::SingleLegDeadlift => "Single Leg Deadlift",
            Self::HipThrust => "Hip Thrust",
            Self::GluteBridge => "Glute Bridge",
            Self::SingleLegGluteBridge => "Single Leg Glute Bridge",
            Self::LegPress => "Leg Press",
            Self::LegCurl => "Leg Curl",
            Self::LegExtension => "Leg Extension",
            Self::NordicCurl => "Nordic Curl",
            Self::HipAbduction => "Hip Abduction",
            Self::Clamshell => "Clamshell",
            Self::MonsterWalk => "Monster Walk",
            Self::CalfRaise => "Calf Raise",
            Self::SingleLegCalfRaise => "Single Leg Calf Raise",
            Self::SingleLegStairCalfRaise => "Single Leg Stair Calf Raise",
            Self::TibRaise => "Tib Raise",
            Self::ShortFootExercise => "Short Foot Exercise",
            Self::Bench => "Bench",
            Self::InclineBench => "Incline Bench",
            Self::DumbbellBench => "Dumbbell Bench",
            Self::OverheadPress => "Overhead Press",
            Self::DumbbellOverheadPress => "Dumbbell Overhead Press",
            Self::LateralRaise => "Lateral Raise",
            Self::FacePull => "Face Pull",
            Self::Shrug => "Shrug",
            Self::Row => "Row",
            Self::DumbbellRow => "Dumbbell Row",
            Self::Pullup => "Pullup",
            Self::ChinUp => "Chin Up",
            Self::LatPulldown => "Lat Pulldown",
            Self::BicepCurl => "Bicep Curl",
            Self::HammerCurl => "Hammer Curl",
            Self::TricepExtension => "Tricep Extension",
            Self::TricepDip => "Tricep Dip",
            Self::Pushup => "Pushup",
            Self::Situp => "Situp",
            Self::Crunch => "Crunch",
            Self::DeadBugs => "Dead Bugs",
            Self::BirdDog => "Bird Dog",
            Self::RushNTwist => "Rush N Twist",
            Self::FourtyFiveDegreeBackExtension => "45 Degree Back Extension",
            Self::LemonSqueezers => "Lemon Squeezers",
            Self::SupineKneeDrive => "Supine Knee Drive",
            Self::OneLegBuck => "One Leg Buck",
            Self::KettlebellSwing => "Kettlebell Swing",
            Self::BoxJump => "Box Jump",
            Self::SpeedSkaterJumps => "Speed Skater Jumps",
            Self::Plank => "Plank",
            Self::SidePlank => "Side Plank",
            Self::CopenhagenPlank => "Copenhagen Plank",
            Self::HollowHold => "Hollow Hold",
            Self::DeadHang => "Dead Hang",
            Self::WallSit => "Wall Sit",
            Self::FarmerCarry => "Farmer Carry",
            Self::SuitcaseCarry => "Suitcase Carry",
            Self::SledPush => "Sled Push",
        }
    }

    /// How sets of this exercise are quantified
    #[must_use]
    pub const fn measure(self) -> ExerciseMeasure {
        match self {
            Self::FarmerCarry | Self::SuitcaseCarry | Self::SledPush => ExerciseMeasure::Distance,
            Self::Plank
            | Self::SidePlank
            | Self::CopenhagenPlank
            | Self::HollowHold
            | Self::DeadHang
            | Self::WallSit => ExerciseMeasure::HeldDuration,
            _ => ExerciseMeasure::Load,
        }
    }
}

/// Informal and historical spellings found in older logs
const ALIASES: &[(&str, Exercise)] = &[
    ("farmer cary", Exercise::FarmerCarry),
    ("farmers carry", Exercise::FarmerCarry),
    ("farmer's carry", Exercise::FarmerCarry),
    ("suitcase cary", Exercise::SuitcaseCarry),
    ("rdl", Exercise::RomanianDeadlift),
    ("single leg rdl", Exercise::SingleLegDeadlift),
    ("bench press", Exercise::Bench),
    ("incline bench press", Exercise::InclineBench),
    ("ohp", Exercise::OverheadPress),
    ("rows", Exercise::Row),
    ("bent over row", Exercise::Row),
    ("pullups", Exercise::Pullup),
    ("pull up", Exercise::Pullup),
    ("pull ups", Exercise::Pullup),
    ("pull-up", Exercise::Pullup),
    ("chinup", Exercise::ChinUp),
    ("chin ups", Exercise::ChinUp),
    ("pushups", Exercise::Pushup),
    ("push up", Exercise::Pushup),
    ("push ups", Exercise::Pushup),
    ("push-up", Exercise::Pushup),
    ("situps", Exercise::Situp),
    ("sit up", Exercise::Situp),
    ("sit ups", Exercise::Situp),
    ("crunches", Exercise::Crunch),
    ("dead bug", Exercise::DeadBugs),
    ("russian twist", Exercise::RushNTwist),
    ("rush and twist", Exercise::RushNTwist),
    ("back extension", Exercise::FourtyFiveDegreeBackExtension),
    ("45 degree back extensions", Exercise::FourtyFiveDegreeBackExtension),
    ("lemon squeezer", Exercise::LemonSqueezers),
    ("calf raises", Exercise::CalfRaise),
    ("single leg calf raises", Exercise::SingleLegCalfRaise),
    ("tibialis raise", Exercise::TibRaise),
    ("bicep curls", Exercise::BicepCurl),
    ("curl", Exercise::BicepCurl),
    ("hammer curls", Exercise::HammerCurl),
    ("lunges", Exercise::Lunge),
    ("step ups", Exercise::StepUp),
    ("bulgarian split squats", Exercise::BulgarianSplitSquat),
    ("split squat", Exercise::BulgarianSplitSquat),
    ("kb swing", Exercise::KettlebellSwing),
    ("box jumps", Exercise::BoxJump),
    ("speed skaters", Exercise::SpeedSkaterJumps),
    ("clamshells", Exercise::Clamshell),
    ("nordic curls", Exercise::NordicCurl),
    ("copenhagen", Exercise::CopenhagenPlank),
];

static BY_NAME: LazyLock<HashMap<String, Exercise>> = LazyLock::new(|| {
    let canonical = Exercise::ALL
        .iter()
        .map(|exercise| (exercise.name().to_lowercase(), *exercise));
    let aliases = ALIASES
        .iter()
        .map(|(alias, exercise)| ((*alias).to_owned(), *exercise));
    canonical.chain(aliases).collect()
});

impl Exercise {
    /// Resolve a name as written in a log, ignoring case and surrounding whitespace
    ///
    /// Accepts the display name of any exercise and the historical spellings
    /// in the alias table. Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(&name.trim().to_lowercase()).copied()
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
