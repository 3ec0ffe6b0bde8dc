use crate::error::{BadEnvVarSnafu, RollcallResult};
use dotenvy::var;
use snafu::ResultExt;
use std::env::VarError;

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    bind_addr: String,
    seed_demo_data: bool,
}

impl RuntimeConfiguration {
    pub fn new() -> RollcallResult<Self> {
        Ok(Self {
            bind_addr: optional_var("ROLLCALL_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string()),
            seed_demo_data: optional_var("ROLLCALL_SEED_DEMO_DATA")?
                .is_none_or(|value| matches!(value.as_str(), "1" | "true" | "yes")),
        })
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub const fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }
}

impl Default for RuntimeConfiguration {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_SERVER_IP.to_string(),
            seed_demo_data: false,
        }
    }
}

fn optional_var(name: &'static str) -> RollcallResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).map(Some).context(BadEnvVarSnafu { name }),
    }
}
