pub mod log_sender;
