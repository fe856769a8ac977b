pub mod language;
pub mod types;
