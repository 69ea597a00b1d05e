// Domain layer - Core types and errors

pub mod errors;
pub mod model;
