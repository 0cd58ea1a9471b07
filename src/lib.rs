//! Layered configuration loading across platform directories.
//!
//! ```no_run
//! use multiconf::config::{Multiconf, YamlParser};
//!
//! let mut conf = Multiconf::new(
//!     "myapp",
//!     YamlParser,
//!     [
//!         "/etc/myapp.conf",
//!         "{{.Home}}/.myapp.conf",
//!         "{{.Config}}/myapp.conf",
//!     ],
//! );
//! conf.load()?;
//!
//! if let Some(key) = conf.root().get("key") {
//!     println!("{key}");
//! }
//! # Ok::<(), multiconf::error::LoadError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::Multiconf;
pub use error::LoadError;
