use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::planner::constants::{BMI_NORMAL_UPPER, BMI_OVERWEIGHT_UPPER, BMI_UNDERWEIGHT_UPPER};

/// User body profile as supplied by the profile store.
///
/// `bmi` and `target_active_metabolic_rate` are computed upstream; this
/// crate only consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub current_weight: f64,
    pub target_weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: u8,

    /// Raw goal label; validated when targets are computed.
    pub goal_type: String,

    /// Target active metabolic rate (kcal/day) before BMI correction.
    pub target_active_metabolic_rate: f64,

    pub bmi: f64,
}

impl UserProfile {
    /// Load a profile from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the profile as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Weight class derived from BMI. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_UPPER {
            BmiStatus::Underweight
        } else if bmi < BMI_NORMAL_UPPER {
            BmiStatus::Normal
        } else if bmi < BMI_OVERWEIGHT_UPPER {
            BmiStatus::Overweight
        } else {
            BmiStatus::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "underweight",
            BmiStatus::Normal => "normal",
            BmiStatus::Overweight => "overweight",
            BmiStatus::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Echo of the profile together with the targets a plan was built for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfo {
    pub current_weight: f64,
    pub target_weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: u8,
    pub goal_type: String,
    pub bmi: f64,
    pub bmi_status: BmiStatus,

    /// BMI-adjusted energy budget the targets were derived from.
    pub target_amr: f64,
    pub carb_target: f64,
    pub protein_target: f64,
    pub fat_target: f64,
}
