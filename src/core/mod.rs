pub mod controller;
pub mod input_adapter;

pub use controller::{Button, Controller, InputSnapshot, MovementState};
pub use input_adapter::WinitController;
