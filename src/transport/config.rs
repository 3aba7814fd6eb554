use derive_builder::Builder;
use std::time::Duration;

const ENV_MAX_PER_ROUTE: &str = "IAM_HTTP_MAX_PER_ROUTE";
const ENV_MAX_TOTAL: &str = "IAM_HTTP_MAX_TOTAL";

/// Connection pool sizing. `reqwest` has no single "max total connections"
/// knob, so `max_total` is validated and exposed but only `max_per_route`
/// maps onto an actual `reqwest::ClientBuilder` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_per_route: u32,
    pub max_total: u32,
}

impl PoolConfig {
    const DEFAULT_MAX_PER_ROUTE: u32 = u32::MAX / 2;
    const DEFAULT_MAX_TOTAL: u32 = u32::MAX;

    /// Reads `max_per_route`/`max_total` from the environment, falling
    /// back to the defaults for whichever variable is unset or unparseable.
    pub fn from_env() -> Self {
        let max_per_route = std::env::var(ENV_MAX_PER_ROUTE)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_MAX_PER_ROUTE);
        let max_total = std::env::var(ENV_MAX_TOTAL)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_MAX_TOTAL);
        Self::new(max_per_route, max_total)
    }

    /// Reverts both fields to their defaults and logs a warning when
    /// `max_total < max_per_route`, since that inversion can never be
    /// satisfied by any real pool.
    pub fn new(max_per_route: u32, max_total: u32) -> Self {
        if max_total < max_per_route {
            tracing::warn!(
                max_per_route,
                max_total,
                "pool config has max_total < max_per_route; reverting to defaults"
            );
            return Self::default();
        }
        Self {
            max_per_route,
            max_total,
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_per_route: Self::DEFAULT_MAX_PER_ROUTE,
            max_total: Self::DEFAULT_MAX_TOTAL,
        }
    }
}

/// HTTP proxy configuration, applied via `reqwest::Proxy::all`.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub url: String,
    pub basic_auth: Option<(String, String)>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            basic_auth: None,
        }
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }
}

/// Transport-level configuration: timeouts, pool sizing, and an optional
/// proxy. An owned-pattern `derive_builder` builder, following the same
/// style as `RetryConfig`.
#[derive(Clone, Builder)]
#[builder(
    name = "TransportConfigBuilder",
    pattern = "owned",
    setter(strip_option)
)]
pub struct TransportConfig {
    #[builder(default = Duration::from_secs(10))]
    pub connect_timeout: Duration,

    #[builder(default = Duration::from_secs(300))]
    pub read_timeout: Duration,

    #[builder(default = PoolConfig::from_env())]
    pub pool: PoolConfig,

    #[builder(default = None)]
    pub proxy: Option<ProxyConfig>,
}

impl TransportConfig {
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(300),
            pool: PoolConfig::from_env(),
            proxy: None,
        }
    }
}

impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("pool", &self.pool)
            .field("proxy", &self.proxy.as_ref().map(|p| &p.url))
            .finish()
    }
}
