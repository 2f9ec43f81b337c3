pub mod detection_record_repository;
pub mod disease_info_repository;
