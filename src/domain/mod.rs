mod audio_format;
mod language_code;
mod provider_result;
mod usage_cost;

pub use audio_format::AudioFormat;
pub use language_code::LanguageCode;
pub use provider_result::{DetectionOutcome, ProviderResult};
pub use usage_cost::UsageCost;
