//! Generator configuration

/// Default Airtable REST API base URL; the base id is appended
pub const DEFAULT_SERVER_BASE: &str = "https://api.airtable.com/v0";

/// Default `info.version`
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// HTTP method used for the update operation on item paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMethod {
    /// Partial update; only the given fields change
    #[default]
    Patch,
    /// Destructive update; unspecified fields are cleared
    Put,
}

/// Options controlling document generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub update_method: UpdateMethod,
    pub server_base: String,
    pub api_version: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            update_method: UpdateMethod::default(),
            server_base: DEFAULT_SERVER_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_update_method(mut self, update_method: UpdateMethod) -> Self {
        self.update_method = update_method;
        self
    }

    pub fn with_server_base(mut self, server_base: impl Into<String>) -> Self {
        self.server_base = server_base.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Server URL for a base
    pub fn server_url(&self, base_id: &str) -> String {
        format!("{}/{}", self.server_base.trim_end_matches('/'), base_id)
    }
}
