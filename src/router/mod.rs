pub mod read_router;
pub mod write_router;
