mod language_detector;

pub use language_detector::{Detection, DetectorError, LanguageDetector};
