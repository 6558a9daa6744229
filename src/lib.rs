pub mod config;
pub mod demo;
pub mod trace;
pub mod wrapper;

pub use wrapper::Wrapper;
