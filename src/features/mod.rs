pub mod instance;
pub mod resolution;
