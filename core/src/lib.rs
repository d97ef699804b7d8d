pub mod greeting;
pub mod session;
