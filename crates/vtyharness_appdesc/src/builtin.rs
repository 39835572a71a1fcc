//! Built-in descriptors for the supported systems under test.

use std::collections::BTreeMap;

use crate::descriptor::AppDescriptor;
use crate::types::AppRecord;

impl AppDescriptor {
    /// Descriptor for the osmo-smlc repository.
    ///
    /// One application: the SMLC, VTY on port 4271, launched with its
    /// example config.
    pub fn osmo_smlc() -> Self {
        let mut app_configs = BTreeMap::new();
        app_configs.insert(
            "osmo-smlc".to_string(),
            vec!["doc/examples/osmo-smlc/osmo-smlc.cfg".to_string()],
        );

        let descriptor = Self::new(
            app_configs,
            vec![AppRecord::new(
                4271,
                "src/osmo-smlc/osmo-smlc",
                "OsmoSMLC",
                "osmo-smlc",
            )],
            vec![
                "./src/osmo-smlc/osmo-smlc".to_string(),
                "-c".to_string(),
                "doc/examples/osmo-smlc/osmo-smlc.cfg".to_string(),
            ],
            "osmo-smlc",
        );
        descriptor.expect("built-in osmo-smlc descriptor is consistent")
    }
}
