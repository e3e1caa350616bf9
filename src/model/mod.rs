pub mod input;
pub mod message;
pub mod rps;
pub mod solution;
pub mod validation;
