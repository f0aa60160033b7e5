mod connection;
mod utils;

pub mod console_query;
pub mod error;
pub mod http_version;
pub mod logging;
pub mod probe;
pub mod probe_config;
pub mod request;
pub mod request_method;
