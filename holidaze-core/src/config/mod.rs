//! Configuration for the Holidaze client.

mod global_config;

pub use global_config::{DEFAULT_API_URL, HolidazeConfig, base_dir};
