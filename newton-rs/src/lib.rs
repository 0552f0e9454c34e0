pub mod env;
pub mod error;
pub mod graphics;
pub mod logger;
pub mod models;
pub mod renderer;
pub mod result;
