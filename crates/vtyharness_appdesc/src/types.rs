//! Core descriptor types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One launchable application under test.
///
/// The `id` doubles as the key into the descriptor's config mapping, linking
/// the process to its per-scenario configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    /// TCP port the VTY administrative interface listens on.
    pub port: u16,
    /// Executable path, relative to the repository root of the system under test.
    pub executable: String,
    /// Human-readable display name (e.g. "OsmoSMLC").
    pub name: String,
    /// Short identifier (e.g. "osmo-smlc").
    pub id: String,
}

impl AppRecord {
    pub fn new(
        port: u16,
        executable: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            port,
            executable: executable.into(),
            name: name.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for AppRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) on port {}", self.name, self.executable, self.port)
    }
}

/// Strip an optional `./` prefix so launch commands written as
/// `./src/foo/foo` compare equal to table entries written as `src/foo/foo`.
pub(crate) fn normalize_executable(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_name_and_port() {
        let record = AppRecord::new(4271, "src/osmo-smlc/osmo-smlc", "OsmoSMLC", "osmo-smlc");
        assert_eq!(
            record.to_string(),
            "OsmoSMLC (src/osmo-smlc/osmo-smlc) on port 4271"
        );
    }

    #[test]
    fn normalize_strips_leading_dot_slash() {
        assert_eq!(
            normalize_executable("./src/osmo-smlc/osmo-smlc"),
            "src/osmo-smlc/osmo-smlc"
        );
        assert_eq!(
            normalize_executable("src/osmo-smlc/osmo-smlc"),
            "src/osmo-smlc/osmo-smlc"
        );
    }
}
