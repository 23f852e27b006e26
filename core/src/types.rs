//! Shared primitive types and the closed value domains of the schema.
//!
//! Every enumerated column in the database has a matching enum here.
//! Text coming out of the store is parsed back through `FromStr`, so an
//! unexpected label surfaces as `TrackerError::InvalidValue` instead of
//! leaking a free-form string into the rest of the crate.

use crate::error::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Row id of a user. All dependent records carry one.
pub type UserId = i64;

/// Row id of any dependent record.
pub type RecordId = i64;

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label as stored in the database.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TrackerError;

            fn from_str(s: &str) -> TrackerResult<Self> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(TrackerError::invalid_value($kind, other)),
                }
            }
        }
    };
}

labelled_enum! {
    Gender, "gender" {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

labelled_enum! {
    /// Workout effort level. Only `High` counts toward the
    /// high-intensity share used by the fitness recommendation.
    Intensity, "intensity" {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

labelled_enum! {
    MealType, "meal type" {
        Breakfast => "Breakfast",
        Lunch => "Lunch",
        Dinner => "Dinner",
        Snack => "Snack",
    }
}

labelled_enum! {
    /// Subjective sleep rating, ordered worst to best.
    SleepQuality, "sleep quality" {
        Poor => "Poor",
        Fair => "Fair",
        Good => "Good",
        Excellent => "Excellent",
    }
}

/// Blood pressure reading, stored as `"systolic/diastolic"` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

impl BloodPressure {
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        Self { systolic, diastolic }
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

impl FromStr for BloodPressure {
    type Err = TrackerError;

    fn from_str(s: &str) -> TrackerResult<Self> {
        let invalid = || TrackerError::invalid_value("blood pressure", s);
        let (sys, dia) = s.trim().split_once('/').ok_or_else(invalid)?;
        let systolic: u16 = sys.trim().parse().map_err(|_| invalid())?;
        let diastolic: u16 = dia.trim().parse().map_err(|_| invalid())?;
        if systolic == 0 || diastolic == 0 {
            return Err(invalid());
        }
        Ok(Self { systolic, diastolic })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_the_same_variant() {
        for g in Gender::ALL {
            assert_eq!(g.as_str().parse::<Gender>().unwrap(), *g);
        }
        for q in SleepQuality::ALL {
            assert_eq!(q.to_string().parse::<SleepQuality>().unwrap(), *q);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Extreme".parse::<Intensity>().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidValue { kind: "intensity", .. }));
        assert!("breakfast".parse::<MealType>().is_err(), "labels are case-sensitive");
    }

    #[test]
    fn blood_pressure_parses_sys_dia() {
        let bp: BloodPressure = "120/80".parse().unwrap();
        assert_eq!(bp, BloodPressure::new(120, 80));
        assert_eq!(bp.to_string(), "120/80");
    }

    #[test]
    fn malformed_blood_pressure_is_rejected() {
        for bad in ["120", "120/", "/80", "abc/80", "0/80", "120-80"] {
            assert!(bad.parse::<BloodPressure>().is_err(), "accepted {bad}");
        }
    }
}
