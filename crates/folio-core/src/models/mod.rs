pub mod message;
pub mod portfolio;
pub mod wire;
