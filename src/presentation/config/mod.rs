mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{DetectorSettings, GeminiSettings, SarvamSettings, ServerSettings, Settings};
