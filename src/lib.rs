#![forbid(unsafe_code)]

pub mod assets;
pub mod cli;
pub mod convert;
pub mod extract;
pub mod fetch;
pub mod formats;
pub mod logging;
pub mod render;
pub mod site;
