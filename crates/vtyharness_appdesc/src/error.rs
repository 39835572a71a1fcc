//! Error types for descriptor loading and validation.

use thiserror::Error;

/// Descriptor operation result type.
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors raised by descriptor lookups and consistency checks.
///
/// Everything except [`DescriptorError::UnknownApp`] is an authoring-time
/// defect: a well-formed descriptor never produces them after load.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Config lookup for a name that is not in the mapping.
    #[error("Unknown application: {0}")]
    UnknownApp(String),

    /// The config mapping has no entries at all.
    #[error("Descriptor declares no config mappings")]
    NoConfigs,

    /// An application maps to an empty list of config files.
    #[error("Application {0} maps to an empty config list")]
    EmptyConfigList(String),

    /// A config path entry is the empty string.
    #[error("Application {0} maps to an empty config path")]
    EmptyConfigPath(String),

    /// The application table has no records.
    #[error("Descriptor declares no application records")]
    NoApps,

    /// An application record field that must be non-empty is empty.
    #[error("Application record has an empty {field} field")]
    EmptyRecordField { field: &'static str },

    /// Port 0 is not a bindable VTY port.
    #[error("Application {id} declares invalid port {port}")]
    InvalidPort { id: String, port: u16 },

    /// Two application records share a short identifier.
    #[error("Duplicate application id: {0}")]
    DuplicateAppId(String),

    /// The designated default application is absent from the table.
    #[error("Default application {0} is not in the application table")]
    DefaultAppMissing(String),

    /// The VTY launch command has no argv entries.
    #[error("VTY command is empty")]
    EmptyVtyCommand,

    /// The VTY command program differs from the default app's executable.
    #[error("VTY command program {program} does not match default application executable {executable}")]
    VtyCommandMismatch { program: String, executable: String },

    /// Descriptor file could not be read.
    #[error("Failed to read descriptor file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Descriptor file is not valid TOML.
    #[error("Failed to parse descriptor: {0}")]
    Parse(#[from] toml::de::Error),

    /// Descriptor could not be serialized back to TOML.
    #[error("Failed to serialize descriptor: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl DescriptorError {
    /// Create an unknown-application lookup error.
    pub fn unknown_app(name: impl Into<String>) -> Self {
        Self::UnknownApp(name.into())
    }
}
