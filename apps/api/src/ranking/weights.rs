use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub certifications: f64,
    pub personality: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            skills: 0.3,
            experience: 0.2,
            education: 0.1,
            certifications: 0.1,
            personality: 0.3,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

impl RankingWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.certifications + self.personality
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        let named = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("certifications", self.certifications),
            ("personality", self.personality),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { name, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }
        Ok(())
    }
}
