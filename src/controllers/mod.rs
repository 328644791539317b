pub mod calculator_controller;
pub mod preferences_controller;
pub mod system_controller;
