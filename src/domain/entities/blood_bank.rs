//! Blood bank entity and blood-group mapping.

use chrono::{DateTime, Utc};

/// The eight supported blood groups.
///
/// Each variant maps statically to the inventory column holding its unit
/// count, so external keys never turn into SQL identifiers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    OPositive,
    ONegative,
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::OPositive,
        BloodGroup::ONegative,
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
    ];

    /// Parses an external key like `"O+"` or `"AB-"`.
    ///
    /// Unknown keys yield `None`; callers translate that into an empty
    /// result set rather than an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "O+" => Some(BloodGroup::OPositive),
            "O-" => Some(BloodGroup::ONegative),
            "A+" => Some(BloodGroup::APositive),
            "A-" => Some(BloodGroup::ANegative),
            "B+" => Some(BloodGroup::BPositive),
            "B-" => Some(BloodGroup::BNegative),
            "AB+" => Some(BloodGroup::AbPositive),
            "AB-" => Some(BloodGroup::AbNegative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }

    /// Inventory column holding the unit count for this group.
    pub fn column(&self) -> &'static str {
        match self {
            BloodGroup::OPositive => "blood_group_o_positive",
            BloodGroup::ONegative => "blood_group_o_negative",
            BloodGroup::APositive => "blood_group_a_positive",
            BloodGroup::ANegative => "blood_group_a_negative",
            BloodGroup::BPositive => "blood_group_b_positive",
            BloodGroup::BNegative => "blood_group_b_negative",
            BloodGroup::AbPositive => "blood_group_ab_positive",
            BloodGroup::AbNegative => "blood_group_ab_negative",
        }
    }
}

/// A blood bank with per-group unit inventory.
///
/// Names are unique. Soft-deleted via `is_active`; the inventory of an
/// inactive bank is never reported.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BloodBank {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub phone: String,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub blood_group_o_positive: i32,
    pub blood_group_o_negative: i32,
    pub blood_group_a_positive: i32,
    pub blood_group_a_negative: i32,
    pub blood_group_b_positive: i32,
    pub blood_group_b_negative: i32,
    pub blood_group_ab_positive: i32,
    pub blood_group_ab_negative: i32,
    pub available_24_7: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BloodBank {
    /// Unit count for a given blood group.
    pub fn units(&self, group: BloodGroup) -> i32 {
        match group {
            BloodGroup::OPositive => self.blood_group_o_positive,
            BloodGroup::ONegative => self.blood_group_o_negative,
            BloodGroup::APositive => self.blood_group_a_positive,
            BloodGroup::ANegative => self.blood_group_a_negative,
            BloodGroup::BPositive => self.blood_group_b_positive,
            BloodGroup::BNegative => self.blood_group_b_negative,
            BloodGroup::AbPositive => self.blood_group_ab_positive,
            BloodGroup::AbNegative => self.blood_group_ab_negative,
        }
    }
}

/// Input data for creating a new blood bank.
#[derive(Debug, Clone)]
pub struct NewBloodBank {
    pub name: String,
    pub description: Option<String>,
    pub phone: String,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub blood_group_o_positive: i32,
    pub blood_group_o_negative: i32,
    pub blood_group_a_positive: i32,
    pub blood_group_a_negative: i32,
    pub blood_group_b_positive: i32,
    pub blood_group_b_negative: i32,
    pub blood_group_ab_positive: i32,
    pub blood_group_ab_negative: i32,
    pub available_24_7: bool,
}

/// Partial update for an existing blood bank.
#[derive(Debug, Clone, Default)]
pub struct BloodBankPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub phone: Option<String>,
    pub location: Option<Option<String>>,
    pub latitude: Option<Option<String>>,
    pub longitude: Option<Option<String>>,
    pub blood_group_o_positive: Option<i32>,
    pub blood_group_o_negative: Option<i32>,
    pub blood_group_a_positive: Option<i32>,
    pub blood_group_a_negative: Option<i32>,
    pub blood_group_b_positive: Option<i32>,
    pub blood_group_b_negative: Option<i32>,
    pub blood_group_ab_positive: Option<i32>,
    pub blood_group_ab_negative: Option<i32>,
    pub available_24_7: Option<bool>,
    pub is_active: Option<bool>,
}
