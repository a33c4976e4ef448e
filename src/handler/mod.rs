pub mod read_handler;
pub mod write_handler;
