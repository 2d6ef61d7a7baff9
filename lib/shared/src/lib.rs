pub mod keys;
pub mod session;
