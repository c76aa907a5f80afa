use std::net::SocketAddr;

use serde::Deserialize;
use svcprobe_core::error::{Result, SvcProbeError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub labels: LabelSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            labels: LabelSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SvcProbeError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.labels.validate()?;
        Ok(())
    }

    /// Apply `POD_NAMESPACE`, `POD_NAME` and `SVCPROBE_LISTEN` from `lookup`.
    /// Environment values win over the file.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ns) = lookup("POD_NAMESPACE") {
            self.labels.namespace = ns;
        }
        if let Some(pod) = lookup("POD_NAME") {
            self.labels.pod = pod;
        }
        if let Some(listen) = lookup("SVCPROBE_LISTEN") {
            self.server.listen = listen;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SvcProbeError::BadConfig(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

/// Identifying labels attached to every exported metric.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelSection {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_pod")]
    pub pod: String,
}

impl Default for LabelSection {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            pod: default_pod(),
        }
    }
}

impl LabelSection {
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(SvcProbeError::BadConfig("labels.namespace must not be empty".into()));
        }
        if self.pod.trim().is_empty() {
            return Err(SvcProbeError::BadConfig("labels.pod must not be empty".into()));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_namespace() -> String {
    "default".into()
}
fn default_pod() -> String {
    "unknown".into()
}
