pub mod log_once;
