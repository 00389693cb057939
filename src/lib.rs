pub mod app;
pub mod bridge;
pub mod bumper;
pub mod core;
