pub mod config;
pub mod logging;

pub mod decode;
pub mod descriptor;
pub mod export;
pub mod location;
