pub mod detect_disease;
pub mod get_all_detections;
pub mod get_detection_history;
