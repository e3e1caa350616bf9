pub mod cipher;
pub mod display;
pub mod hub;
pub mod protocol;
pub mod rps;
pub mod table;
