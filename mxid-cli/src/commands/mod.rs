pub mod batch;
pub mod generate;
pub mod state;
pub mod verify;
