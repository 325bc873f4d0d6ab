mod classifier;
mod config;
mod db;
mod error;
mod http;
mod literal;
mod signal_matcher;
mod types;

pub use classifier::UaClassifier;
pub use config::{GateConfig, ListenerConfig, RouteConfig, SignalsConfig, TimeoutConfig};
pub use error::{Error, Result};
pub use http::GateServer;
pub use types::*;
