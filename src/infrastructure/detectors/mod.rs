mod detector_factory;
mod gemini_detector;
mod mock_detector;
pub mod pricing;
mod sarvam_detector;

pub use detector_factory::DetectorFactory;
pub use gemini_detector::GeminiDetector;
pub use mock_detector::MockDetector;
pub use sarvam_detector::SarvamDetector;
