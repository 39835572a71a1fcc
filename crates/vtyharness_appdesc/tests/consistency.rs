//! Descriptor consistency properties, checked against the built-in
//! osmo-smlc descriptor and its TOML file form.

use std::io::Write;

use vtyharness_appdesc::{AppDescriptor, AppRecord, DescriptorError};

#[test]
fn every_mapped_config_path_is_non_empty() {
    let descriptor = AppDescriptor::osmo_smlc();
    for app in descriptor.apps() {
        if let Ok(paths) = descriptor.config_paths(&app.id) {
            assert!(!paths.is_empty(), "empty config list for {}", app.id);
            for path in paths {
                assert!(!path.is_empty(), "empty config path for {}", app.id);
            }
        }
    }
}

#[test]
fn default_app_is_in_the_table() {
    let descriptor = AppDescriptor::osmo_smlc();
    let default = descriptor.vty_app().clone();
    assert!(descriptor.apps().contains(&default));
}

#[test]
fn vty_command_launches_the_default_app() {
    let descriptor = AppDescriptor::osmo_smlc();
    let program = &descriptor.vty_command()[0];
    let executable = &descriptor.vty_app().executable;
    assert_eq!(program.strip_prefix("./").unwrap_or(program), executable);
}

#[test]
fn every_port_is_a_valid_tcp_port() {
    let descriptor = AppDescriptor::osmo_smlc();
    for app in descriptor.apps() {
        assert!(app.port > 0, "port 0 for {}", app.id);
        // u16 already caps the upper bound at 65535
    }
}

#[test]
fn every_app_id_has_a_config_entry() {
    let descriptor = AppDescriptor::osmo_smlc();
    for app in descriptor.apps() {
        assert!(
            descriptor.config_paths(&app.id).is_ok(),
            "no config mapping for {}",
            app.id
        );
    }
}

#[test]
fn osmo_smlc_lookup_scenarios() {
    let descriptor = AppDescriptor::osmo_smlc();

    let paths = descriptor.config_paths("osmo-smlc").unwrap();
    assert_eq!(paths, ["doc/examples/osmo-smlc/osmo-smlc.cfg"]);

    let err = descriptor.config_paths("nonexistent-app").unwrap_err();
    assert!(matches!(err, DescriptorError::UnknownApp(name) if name == "nonexistent-app"));
}

#[test]
fn osmo_smlc_concrete_records() {
    let descriptor = AppDescriptor::osmo_smlc();

    let expected = AppRecord::new(4271, "src/osmo-smlc/osmo-smlc", "OsmoSMLC", "osmo-smlc");
    assert_eq!(descriptor.apps(), [expected.clone()]);
    assert_eq!(descriptor.vty_app(), &expected);
    assert_eq!(
        descriptor.vty_command(),
        [
            "./src/osmo-smlc/osmo-smlc",
            "-c",
            "doc/examples/osmo-smlc/osmo-smlc.cfg"
        ]
    );
}

#[test]
fn file_form_matches_builtin() {
    let descriptor = AppDescriptor::osmo_smlc();
    let toml_str = descriptor.to_toml_string().unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml_str.as_bytes()).unwrap();

    let loaded = AppDescriptor::from_file(file.path()).unwrap();
    assert_eq!(loaded, descriptor);
}

#[test]
fn from_file_missing_path_fails_with_io_error() {
    let err = AppDescriptor::from_file("/nonexistent/appdesc.toml").unwrap_err();
    assert!(matches!(err, DescriptorError::Io { .. }));
}
