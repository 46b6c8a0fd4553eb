pub mod classifier;
pub mod message;
pub mod session;
