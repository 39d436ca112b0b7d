use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::StudioError;

/// The fixed set of class categories the studio offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassType {
    Yoga,
    Zumba,
    #[serde(rename = "HIIT")]
    Hiit,
}

impl ClassType {
    pub const ALL: [ClassType; 3] = [ClassType::Yoga, ClassType::Zumba, ClassType::Hiit];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::Yoga => "Yoga",
            ClassType::Zumba => "Zumba",
            ClassType::Hiit => "HIIT",
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassType {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yoga" => Ok(ClassType::Yoga),
            "Zumba" => Ok(ClassType::Zumba),
            "HIIT" => Ok(ClassType::Hiit),
            _ => Err(StudioError::Validation(
                "class_name must be one of Yoga, Zumba, HIIT.".to_string(),
            )),
        }
    }
}

/// A scheduled, capacity-limited fitness class instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessClass {
    pub id: i64,
    pub class_name: ClassType,
    pub instructor: String,
    pub start_time: DateTime<Utc>,
    pub available_slots: i32,
}

/// Payload for the admin class-creation endpoint.
///
/// Every field is optional at the serde level so that missing fields reach
/// the validation functions and produce structured error messages instead of
/// a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: Option<String>,
    pub instructor: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub available_slots: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassResponse {
    pub id: i64,
    pub class_name: ClassType,
    pub instructor: String,
    pub start_time: DateTime<Utc>,
    pub available_slots: i32,
}

impl From<FitnessClass> for CreateClassResponse {
    fn from(class: FitnessClass) -> Self {
        Self {
            id: class.id,
            class_name: class.class_name,
            instructor: class.instructor,
            start_time: class.start_time,
            available_slots: class.available_slots,
        }
    }
}

/// A class as presented on the read path, with its start time rendered in
/// the caller's (or the default) timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    pub id: i64,
    pub class_name: ClassType,
    pub instructor: String,
    pub start_time_local: String,
    pub available_slots: i32,
}

impl ClassSummary {
    pub fn from_class(class: FitnessClass, tz: Tz) -> Self {
        tracing::debug!(
            "Converting start_time '{}' to timezone '{}'",
            class.start_time,
            tz
        );
        let start_time_local = class
            .start_time
            .with_timezone(&tz)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string();
        Self {
            id: class.id,
            class_name: class.class_name,
            instructor: class.instructor,
            start_time_local,
            available_slots: class.available_slots,
        }
    }
}
