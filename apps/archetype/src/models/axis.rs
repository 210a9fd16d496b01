//! RIASEC axes and the six-slot containers keyed by them.
//!
//! Every per-axis quantity in the crate lives in an `AxisMap<T>`, indexed by
//! `Axis` in the fixed order R, I, A, S, E, C. That order doubles as the
//! tie-break order for primary archetypes.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const AXIS_COUNT: usize = 6;

/// A raw 6-dimensional point (course vectors, centroids, soft assignments).
pub type AxisVector = [f64; AXIS_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Axis {
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::Realistic,
        Axis::Investigative,
        Axis::Artistic,
        Axis::Social,
        Axis::Enterprising,
        Axis::Conventional,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Axis::Realistic => 'R',
            Axis::Investigative => 'I',
            Axis::Artistic => 'A',
            Axis::Social => 'S',
            Axis::Enterprising => 'E',
            Axis::Conventional => 'C',
        }
    }

    /// Parses a single Holland letter, case-insensitive.
    pub fn from_letter(letter: char) -> Option<Axis> {
        match letter.to_ascii_uppercase() {
            'R' => Some(Axis::Realistic),
            'I' => Some(Axis::Investigative),
            'A' => Some(Axis::Artistic),
            'S' => Some(Axis::Social),
            'E' => Some(Axis::Enterprising),
            'C' => Some(Axis::Conventional),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Realistic => "Realistic",
            Axis::Investigative => "Investigative",
            Axis::Artistic => "Artistic",
            Axis::Social => "Social",
            Axis::Enterprising => "Enterprising",
            Axis::Conventional => "Conventional",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per axis, serialized as an ordered `{"Realistic": .., ...}` map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisMap<T>([T; AXIS_COUNT]);

/// Non-negative per-axis totals or percentages.
pub type AxisScores = AxisMap<f64>;

impl<T> AxisMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, f: impl Fn(Axis, &T) -> U) -> AxisMap<U> {
        AxisMap(Axis::ALL.map(|axis| f(axis, &self.0[axis.index()])))
    }
}

impl AxisScores {
    pub fn zeros() -> Self {
        Self([0.0; AXIS_COUNT])
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }

    /// Rescales to percentages summing to 100.
    /// A zero (or non-finite) total yields all zeros, never NaN.
    pub fn to_percentages(&self) -> AxisScores {
        let total = self.sum();
        if total <= 0.0 || !total.is_finite() {
            return AxisScores::zeros();
        }
        self.map(|_, v| 100.0 * v / total)
    }

    /// Axis with the maximum value; ties go to the earliest axis in R,I,A,S,E,C.
    pub fn primary(&self) -> Axis {
        let mut best = Axis::Realistic;
        for axis in Axis::ALL.into_iter().skip(1) {
            if self.0[axis.index()] > self.0[best.index()] {
                best = axis;
            }
        }
        best
    }
}

impl From<AxisVector> for AxisScores {
    fn from(values: AxisVector) -> Self {
        Self(values)
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.0[axis.index()]
    }
}

impl<T: Serialize> Serialize for AxisMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AXIS_COUNT))?;
        for (axis, value) in self.iter() {
            map.serialize_entry(axis.name(), value)?;
        }
        map.end()
    }
}

/// Missing axes deserialize to `T::default()`.
impl<'de, T: DeserializeOwned + Default> Deserialize<'de> for AxisMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = BTreeMap::<Axis, T>::deserialize(deserializer)?;
        Ok(AxisMap(Axis::ALL.map(|axis| entries.remove(&axis).unwrap_or_default())))
    }
}
