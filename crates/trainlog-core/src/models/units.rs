// ABOUTME: Dimension-typed physical quantities with linear unit conversion
// ABOUTME: Mass, length, time, frequency, dimensionless and pace, plus derived-dimension arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unit Quantities
//!
//! A `Quantity<D>` is an amount paired with a `Unit<D>`, where `D` is a
//! zero-sized dimension marker. Adding a mass to a length does not compile;
//! dividing a time by a length yields a `Quantity<Pace>`.
//!
//! ```rust
//! use trainlog_core::models::units::{length, mass, time, pace};
//!
//! let load = mass::KILOGRAMS.of(20.0) + mass::POUNDS.of(10.0);
//! assert!((load.value_in(mass::POUNDS) - 54.092_452_4).abs() < 1e-6);
//!
//! let run_pace = time::MINUTES.of(8.0) / length::MILES.of(1.0);
//! assert!((run_pace.value_in(pace::MINUTES_PER_MILE) - 8.0).abs() < 1e-9);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::constants::units::{
    KILOGRAMS_PER_POUND, METERS_PER_HUNDRED, METERS_PER_KILOMETER, METERS_PER_MILE,
    POUNDS_PER_TON, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Marker trait for physical dimensions
pub trait Dimension: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable dimension name
    const NAME: &'static str;
}

macro_rules! dimension {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Dimension for $name {
            const NAME: &'static str = $label;
        }
    };
}

dimension!(
    /// Mass, SI base unit kilogram
    Mass,
    "mass"
);
dimension!(
    /// Length, SI base unit meter
    Length,
    "length"
);
dimension!(
    /// Time, SI base unit second
    Time,
    "time"
);
dimension!(
    /// Frequency, SI base unit hertz
    Frequency,
    "frequency"
);
dimension!(
    /// Pure number
    Dimensionless,
    "dimensionless"
);
dimension!(
    /// Inverse speed (time per length), base unit second per meter
    Pace,
    "pace"
);

/// A unit of dimension `D`: a display symbol and a scale factor to the base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit<D: Dimension> {
    symbol: &'static str,
    factor: f64,
    _dimension: PhantomData<D>,
}

impl<D: Dimension> Unit<D> {
    /// Define a unit whose one amount equals `factor` base units
    #[must_use]
    pub const fn new(symbol: &'static str, factor: f64) -> Self {
        Self {
            symbol,
            factor,
            _dimension: PhantomData,
        }
    }

    /// Display symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Scale factor to the base unit
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Build a quantity of `amount` in this unit
    #[must_use]
    pub const fn of(self, amount: f64) -> Quantity<D> {
        Quantity::new(amount, self)
    }
}

/// Mass units
pub mod mass {
    use super::{Mass, Unit, KILOGRAMS_PER_POUND, POUNDS_PER_TON};

    /// Kilogram
    pub const KILOGRAMS: Unit<Mass> = Unit::new("kg", 1.0);
    /// Avoirdupois pound
    pub const POUNDS: Unit<Mass> = Unit::new("lbs", KILOGRAMS_PER_POUND);
    /// Short ton
    pub const TONS: Unit<Mass> = Unit::new("tons", KILOGRAMS_PER_POUND * POUNDS_PER_TON);
}

/// Length units
pub mod length {
    use super::{Length, Unit, METERS_PER_KILOMETER, METERS_PER_MILE};

    /// Meter
    pub const METERS: Unit<Length> = Unit::new("m", 1.0);
    /// Kilometer
    pub const KILOMETERS: Unit<Length> = Unit::new("km", METERS_PER_KILOMETER);
    /// Statute mile
    pub const MILES: Unit<Length> = Unit::new("mi", METERS_PER_MILE);
}

/// Time units
pub mod time {
    use super::{Time, Unit, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

    /// Second
    pub const SECONDS: Unit<Time> = Unit::new("s", 1.0);
    /// Minute
    pub const MINUTES: Unit<Time> = Unit::new("min", SECONDS_PER_MINUTE);
    /// Hour
    pub const HOURS: Unit<Time> = Unit::new("h", SECONDS_PER_HOUR);
}

/// Frequency units
pub mod frequency {
    use super::{Frequency, Unit, SECONDS_PER_MINUTE};

    /// Hertz
    pub const HERTZ: Unit<Frequency> = Unit::new("Hz", 1.0);
    /// Beats (or strokes) per minute
    pub const BEATS_PER_MINUTE: Unit<Frequency> = Unit::new("bpm", 1.0 / SECONDS_PER_MINUTE);
}

/// Dimensionless units
pub mod dimensionless {
    use super::{Dimensionless, Unit};

    /// The unit one
    pub const ONE: Unit<Dimensionless> = Unit::new("", 1.0);
}

/// Pace units
pub mod pace {
    use super::{Pace, Unit, METERS_PER_HUNDRED, METERS_PER_MILE, SECONDS_PER_MINUTE};

    /// Seconds per meter
    pub const SECONDS_PER_METER: Unit<Pace> = Unit::new("s/m", 1.0);
    /// Minutes per mile
    pub const MINUTES_PER_MILE: Unit<Pace> =
        Unit::new("min/mi", SECONDS_PER_MINUTE / METERS_PER_MILE);
    /// Seconds per 100 meters
    pub const SECONDS_PER_100M: Unit<Pace> = Unit::new("s/100m", 1.0 / METERS_PER_HUNDRED);
}

/// An amount of dimension `D` expressed in a particular unit
#[derive(Debug, Clone, Copy)]
pub struct Quantity<D: Dimension> {
    amount: f64,
    unit: Unit<D>,
}

impl<D: Dimension> Quantity<D> {
    /// Create a quantity
    #[must_use]
    pub const fn new(amount: f64, unit: Unit<D>) -> Self {
        Self { amount, unit }
    }

    /// Zero in the given unit
    #[must_use]
    pub const fn zero(unit: Unit<D>) -> Self {
        Self::new(0.0, unit)
    }

    /// Amount in this quantity's own unit
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Unit this quantity is expressed in
    #[must_use]
    pub const fn unit(&self) -> Unit<D> {
        self.unit
    }

    fn base_value(&self) -> f64 {
        self.amount * self.unit.factor
    }

    /// Numeric value of this quantity in `unit`
    #[must_use]
    pub fn value_in(&self, unit: Unit<D>) -> f64 {
        self.base_value() / unit.factor
    }

    /// The same quantity re-expressed in `unit`
    #[must_use]
    pub fn to(&self, unit: Unit<D>) -> Self {
        Self::new(self.value_in(unit), unit)
    }

    /// Sum, expressed in the left operand's unit
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self::new(self.amount + other.value_in(self.unit), self.unit)
    }

    /// Scale by a plain number
    #[must_use]
    pub fn times(self, factor: f64) -> Self {
        Self::new(self.amount * factor, self.unit)
    }

    /// Divide by a count (e.g. an average over `count` samples)
    #[must_use]
    pub fn per(self, count: f64) -> Self {
        Self::new(self.amount / count, self.unit)
    }

    /// Whether the amount is exactly zero
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact zero is the sentinel, not a tolerance check
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Sum an iterator of quantities, expressing the total in `unit`
    pub fn sum<I>(quantities: I, unit: Unit<D>) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        quantities
            .into_iter()
            .fold(Self::zero(unit), |acc, q| acc.plus(q))
    }

    /// The smaller of two quantities by physical magnitude
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.base_value() == other.base_value()
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base_value().partial_cmp(&other.base_value())
    }
}

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(rhs);
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.times(rhs)
    }
}

impl Div<Quantity<Length>> for Quantity<Time> {
    type Output = Quantity<Pace>;

    fn div(self, rhs: Quantity<Length>) -> Quantity<Pace> {
        Quantity::new(
            self.base_value() / rhs.base_value(),
            pace::SECONDS_PER_METER,
        )
    }
}

impl Mul<Quantity<Time>> for Quantity<Frequency> {
    type Output = Quantity<Dimensionless>;

    fn mul(self, rhs: Quantity<Time>) -> Quantity<Dimensionless> {
        Quantity::new(self.base_value() * rhs.base_value(), dimensionless::ONE)
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol.is_empty() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.unit.symbol)
        }
    }
}

impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("amount", &self.amount)?;
        state.serialize_field("unit", self.unit.symbol)?;
        state.end()
    }
}

/// A parsed quantity whose dimension is only known at runtime
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "dimension", rename_all = "snake_case")]
pub enum AnyQuantity {
    /// Load or bodyweight
    Mass(Quantity<Mass>),
    /// Carry or interval distance
    Length(Quantity<Length>),
    /// Hold or interval duration
    Time(Quantity<Time>),
}

impl AnyQuantity {
    /// Name of the carried dimension
    #[must_use]
    pub const fn dimension_name(&self) -> &'static str {
        match self {
            Self::Mass(_) => Mass::NAME,
            Self::Length(_) => Length::NAME,
            Self::Time(_) => Time::NAME,
        }
    }

    /// The mass, if this is one
    #[must_use]
    pub const fn as_mass(&self) -> Option<Quantity<Mass>> {
        match self {
            Self::Mass(q) => Some(*q),
            _ => None,
        }
    }

    /// The length, if this is one
    #[must_use]
    pub const fn as_length(&self) -> Option<Quantity<Length>> {
        match self {
            Self::Length(q) => Some(*q),
            _ => None,
        }
    }

    /// The time, if this is one
    #[must_use]
    pub const fn as_time(&self) -> Option<Quantity<Time>> {
        match self {
            Self::Time(q) => Some(*q),
            _ => None,
        }
    }
}

/// Render a pace as `M:SS/mile`
#[must_use]
pub fn format_minutes_per_mile(value: Quantity<Pace>) -> String {
    let minutes_per_mile = value.value_in(pace::MINUTES_PER_MILE);
    let mut minutes = minutes_per_mile.floor();
    let mut seconds = ((minutes_per_mile - minutes) * 60.0).round();
    if seconds >= 60.0 {
        minutes += 1.0;
        seconds = 0.0;
    }
    format!("{minutes}:{seconds:02}/mile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilograms_to_pounds() {
        assert!((mass::KILOGRAMS.of(1.0).value_in(mass::POUNDS) - 2.204_62).abs() < 1e-5);
    }

    #[test]
    fn test_addition_keeps_left_unit() {
        let total = mass::POUNDS.of(50.0) + mass::KILOGRAMS.of(20.0);
        assert_eq!(total.unit().symbol(), "lbs");
        assert!((total.amount() - 94.092_452_4).abs() < 1e-6);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total = Quantity::sum(Vec::<Quantity<Length>>::new(), length::MILES);
        assert!(total.is_zero());
    }

    #[test]
    fn test_time_over_length_is_pace() {
        let p = time::SECONDS.of(75.0) / length::METERS.of(400.0);
        assert!((p.value_in(pace::SECONDS_PER_100M) - 18.75).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_times_time_is_count() {
        let beats = frequency::BEATS_PER_MINUTE.of(150.0) * time::MINUTES.of(30.0);
        assert!((beats.amount() - 4500.0).abs() < 1e-9);
    }

    #[test]
    fn test_comparison_across_units() {
        assert!(length::KILOMETERS.of(1.0) < length::MILES.of(1.0));
        assert_eq!(time::MINUTES.of(1.0), time::SECONDS.of(60.0));
    }

    #[test]
    fn test_format_minutes_per_mile() {
        assert_eq!(
            format_minutes_per_mile(pace::MINUTES_PER_MILE.of(1.0)),
            "1:00/mile"
        );
        assert_eq!(
            format_minutes_per_mile(pace::MINUTES_PER_MILE.of(1.5)),
            "1:30/mile"
        );
        let same = Quantity::new(1.0 / 6.7056, pace::SECONDS_PER_METER);
        assert_eq!(format_minutes_per_mile(same), "4:00/mile");
    }

    #[test]
    fn test_display() {
        assert_eq!(length::METERS.of(400.0).to_string(), "400 m");
        assert_eq!(dimensionless::ONE.of(4.0).to_string(), "4");
    }
}
