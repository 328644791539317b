pub mod calculator;
pub mod preferences;
pub mod system;
