pub mod fetch;
pub mod points;
