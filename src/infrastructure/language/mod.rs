mod whatlang_detector;

pub use whatlang_detector::WhatlangDetector;
