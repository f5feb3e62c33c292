pub mod ids;
pub mod models;
