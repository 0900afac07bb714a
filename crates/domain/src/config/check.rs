use serde::{Deserialize, Serialize};

/// Which names to compare, and between which resolvers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfig {
    #[serde(default = "default_hostnames")]
    pub hostnames: Vec<String>,

    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<String>,

    #[serde(default = "default_control_resolver")]
    pub control_resolver: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            hostnames: default_hostnames(),
            resolvers: default_resolvers(),
            control_resolver: default_control_resolver(),
        }
    }
}

fn default_hostnames() -> Vec<String> {
    vec!["google.com".to_string()]
}

fn default_resolvers() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()]
}

fn default_control_resolver() -> String {
    "8.8.8.8".to_string()
}
