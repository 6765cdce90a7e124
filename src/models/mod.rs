pub mod file;
pub mod share;
pub mod user;
