pub mod auth;
pub mod config;
pub mod executor;

pub use auth::{BearerToken, NoAuth, RequestAuthenticator};
pub use config::{PoolConfig, ProxyConfig, TransportConfig, TransportConfigBuilder};
pub use executor::TransportExecutor;
