pub mod alphabet;
pub mod api;
pub mod board;
pub mod error;
pub mod input;
pub mod placement;
pub mod render;
pub mod sim;
pub mod writer;
