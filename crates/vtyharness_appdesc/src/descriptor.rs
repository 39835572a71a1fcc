//! The application descriptor table.
//!
//! An [`AppDescriptor`] is the single artifact a test-orchestration framework
//! reads to know which processes it can launch, which config files belong to
//! which named scenario, and which application/invocation is the default
//! target for interactive VTY testing. It is plain data: the framework owns
//! process lifecycle, port polling, and command I/O.
//!
//! Descriptors are immutable after construction. Every constructor validates,
//! so a value you can hold is consistent: the default application is in the
//! table and the VTY command launches that same executable.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{DescriptorError, Result};
use crate::types::{normalize_executable, AppRecord};

/// Static description of the applications available to the test harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Short identifier of the default VTY application. An explicit reference
    /// rather than "first entry of the table", so growing the table cannot
    /// silently change the default.
    default_app: String,
    /// Exact argv used to launch the default application for interactive
    /// VTY tests.
    vty_command: Vec<String>,
    /// App id -> ordered config file paths for named test scenarios.
    app_configs: BTreeMap<String, Vec<String>>,
    /// All launchable applications.
    apps: Vec<AppRecord>,
}

impl AppDescriptor {
    /// Build and validate a descriptor.
    pub fn new(
        app_configs: BTreeMap<String, Vec<String>>,
        apps: Vec<AppRecord>,
        vty_command: Vec<String>,
        default_app: impl Into<String>,
    ) -> Result<Self> {
        let descriptor = Self {
            default_app: default_app.into(),
            vty_command,
            app_configs,
            apps,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Parse a descriptor from a TOML string and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let descriptor: Self = toml::from_str(content)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Load a descriptor from a TOML file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DescriptorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize the descriptor to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Ordered config file paths registered for `app`.
    ///
    /// Fails with [`DescriptorError::UnknownApp`] when `app` is not a key in
    /// the config mapping; the caller is expected to treat that as a fatal
    /// test-setup error, not retry.
    pub fn config_paths(&self, app: &str) -> Result<&[String]> {
        self.app_configs
            .get(app)
            .map(Vec::as_slice)
            .ok_or_else(|| DescriptorError::unknown_app(app))
    }

    /// The full ordered application table.
    pub fn apps(&self) -> &[AppRecord] {
        &self.apps
    }

    /// The fixed argv for launching the default VTY application.
    pub fn vty_command(&self) -> &[String] {
        &self.vty_command
    }

    /// The designated default application record.
    pub fn vty_app(&self) -> &AppRecord {
        self.apps
            .iter()
            .find(|app| app.id == self.default_app)
            .expect("validated descriptor always contains its default app")
    }

    /// Check every authoring-time consistency rule.
    ///
    /// Constructors already run this; it is public so a linting frontend can
    /// re-check a descriptor it assembled by hand.
    pub fn validate(&self) -> Result<()> {
        if self.app_configs.is_empty() {
            return Err(DescriptorError::NoConfigs);
        }
        for (app, paths) in &self.app_configs {
            if paths.is_empty() {
                return Err(DescriptorError::EmptyConfigList(app.clone()));
            }
            if paths.iter().any(|p| p.is_empty()) {
                return Err(DescriptorError::EmptyConfigPath(app.clone()));
            }
        }

        if self.apps.is_empty() {
            return Err(DescriptorError::NoApps);
        }
        let mut seen = std::collections::BTreeSet::new();
        for app in &self.apps {
            if app.executable.is_empty() {
                return Err(DescriptorError::EmptyRecordField {
                    field: "executable",
                });
            }
            if app.name.is_empty() {
                return Err(DescriptorError::EmptyRecordField { field: "name" });
            }
            if app.id.is_empty() {
                return Err(DescriptorError::EmptyRecordField { field: "id" });
            }
            if app.port == 0 {
                return Err(DescriptorError::InvalidPort {
                    id: app.id.clone(),
                    port: app.port,
                });
            }
            if !seen.insert(app.id.as_str()) {
                return Err(DescriptorError::DuplicateAppId(app.id.clone()));
            }
        }

        let default = self
            .apps
            .iter()
            .find(|app| app.id == self.default_app)
            .ok_or_else(|| DescriptorError::DefaultAppMissing(self.default_app.clone()))?;

        let program = self
            .vty_command
            .first()
            .ok_or(DescriptorError::EmptyVtyCommand)?;
        if normalize_executable(program) != normalize_executable(&default.executable) {
            return Err(DescriptorError::VtyCommandMismatch {
                program: program.clone(),
                executable: default.executable.clone(),
            });
        }

        // Apps without scenario configs are accepted, but flagged for review.
        for app in &self.apps {
            if !self.app_configs.contains_key(&app.id) {
                warn!(
                    app = app.id.as_str(),
                    "application has no config mapping entry"
                );
            }
        }

        Ok(())
    }
}
