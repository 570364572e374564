use super::language_code::LanguageCode;
use super::usage_cost::UsageCost;

#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    Success { language: LanguageCode },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResult {
    pub provider: String,
    pub time_taken: f64,
    pub estimated_cost: UsageCost,
    pub outcome: DetectionOutcome,
}

impl ProviderResult {
    pub fn success(
        provider: String,
        language: LanguageCode,
        estimated_cost: UsageCost,
        time_taken: f64,
    ) -> Self {
        Self {
            provider,
            time_taken,
            estimated_cost,
            outcome: DetectionOutcome::Success { language },
        }
    }

    pub fn error(provider: String, message: String, time_taken: f64) -> Self {
        Self {
            provider,
            time_taken,
            estimated_cost: UsageCost::ZERO,
            outcome: DetectionOutcome::Error { message },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, DetectionOutcome::Success { .. })
    }

    pub fn detected_language(&self) -> Option<&LanguageCode> {
        match &self.outcome {
            DetectionOutcome::Success { language } => Some(language),
            DetectionOutcome::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            DetectionOutcome::Success { .. } => None,
            DetectionOutcome::Error { message } => Some(message),
        }
    }
}
