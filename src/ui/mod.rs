pub mod control;
pub mod memory;
pub mod render;
