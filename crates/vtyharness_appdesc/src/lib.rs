//! Application descriptors for VTY test orchestration.
//!
//! A descriptor is the static contract between a repository of network
//! elements and the harness that launches them for administrative-interface
//! (VTY) testing: which config files belong to which named application, which
//! applications exist (port, executable, display name, short id), and which
//! single application/invocation is the default interactive target.
//!
//! The harness itself — spawning processes, waiting for the VTY port,
//! issuing commands, tearing down — lives elsewhere and consumes this crate
//! as plain data.
//!
//! # Usage
//!
//! ```
//! use vtyharness_appdesc::AppDescriptor;
//!
//! let descriptor = AppDescriptor::osmo_smlc();
//! let paths = descriptor.config_paths("osmo-smlc").unwrap();
//! assert_eq!(paths, ["doc/examples/osmo-smlc/osmo-smlc.cfg"]);
//! assert_eq!(descriptor.vty_app().port, 4271);
//! ```

mod builtin;

pub mod descriptor;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use descriptor::AppDescriptor;
pub use error::{DescriptorError, Result};
pub use types::AppRecord;
