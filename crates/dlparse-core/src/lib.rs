pub mod config;
pub mod logging;

pub mod duration;
pub mod hash;
pub mod name;
pub mod package;
pub mod services;
pub mod size;
pub mod text;
pub mod toolkit;

pub use toolkit::Toolkit;
