use url::Url;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend: Backend,
}

#[derive(Debug, Clone)]
pub struct Backend {
    pub base_url: Url,
    /// Whole-request timeout. Unset means the transport's own limits apply.
    pub timeout_secs: Option<u64>,
}
