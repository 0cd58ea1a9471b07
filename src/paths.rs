//! Platform directory resolution.
//!
//! This module maps an application name to the seven directory roles that
//! path templates can reference:
//! - Per-user locations come from the `dirs` crate (XDG variables on Linux,
//!   Known Folders on Windows, `~/Library` on macOS)
//! - System-wide ("site") locations follow each platform's conventions
//!
//! Resolution is an explicit input to loading, never cached process-wide,
//! so callers and tests can substitute their own [`DirectoryResolver`].

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned when platform directories cannot be determined.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("application name must not be empty")]
    EmptyAppName,

    #[error("could not determine the {0} directory for the current user")]
    Unavailable(DirRole),

    #[error("{0}")]
    Other(String),
}

/// Named directory roles available to path templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirRole {
    Home,
    Data,
    SiteData,
    Config,
    SiteConfig,
    Cache,
    Log,
}

impl DirRole {
    pub const ALL: [DirRole; 7] = [
        DirRole::Home,
        DirRole::Data,
        DirRole::SiteData,
        DirRole::Config,
        DirRole::SiteConfig,
        DirRole::Cache,
        DirRole::Log,
    ];

    /// Name used inside `{{.Name}}` placeholders.
    pub fn placeholder(self) -> &'static str {
        match self {
            DirRole::Home => "Home",
            DirRole::Data => "Data",
            DirRole::SiteData => "SiteData",
            DirRole::Config => "Config",
            DirRole::SiteConfig => "SiteConfig",
            DirRole::Cache => "Cache",
            DirRole::Log => "Log",
        }
    }

    /// Look up a role by its placeholder name (case-sensitive).
    pub fn from_placeholder(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.placeholder() == name)
    }
}

impl std::fmt::Display for DirRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirRole::Home => write!(f, "home"),
            DirRole::Data => write!(f, "data"),
            DirRole::SiteData => write!(f, "site data"),
            DirRole::Config => write!(f, "config"),
            DirRole::SiteConfig => write!(f, "site config"),
            DirRole::Cache => write!(f, "cache"),
            DirRole::Log => write!(f, "log"),
        }
    }
}

/// Resolved directories for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformDirs {
    /// The current user's home directory
    pub home: PathBuf,
    /// Per-user data directory (e.g. `~/.local/share/<app>`)
    pub data: PathBuf,
    /// System-wide data directory (e.g. `/usr/local/share/<app>`)
    pub site_data: PathBuf,
    /// Per-user config directory (e.g. `~/.config/<app>`)
    pub config: PathBuf,
    /// System-wide config directory (e.g. `/etc/xdg/<app>`)
    pub site_config: PathBuf,
    /// Per-user cache directory (e.g. `~/.cache/<app>`)
    pub cache: PathBuf,
    /// Per-user log directory (e.g. `~/.cache/<app>/logs`)
    pub log: PathBuf,
}

impl PlatformDirs {
    /// Deterministic layout under `root`, one subdirectory per role.
    ///
    /// Useful in tests and for sandboxed runs.
    pub fn fixed(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            home: root.join("home"),
            data: root.join("data"),
            site_data: root.join("site-data"),
            config: root.join("config"),
            site_config: root.join("site-config"),
            cache: root.join("cache"),
            log: root.join("log"),
        }
    }

    /// Directory for a role.
    pub fn get(&self, role: DirRole) -> &Path {
        match role {
            DirRole::Home => &self.home,
            DirRole::Data => &self.data,
            DirRole::SiteData => &self.site_data,
            DirRole::Config => &self.config,
            DirRole::SiteConfig => &self.site_config,
            DirRole::Cache => &self.cache,
            DirRole::Log => &self.log,
        }
    }
}

/// Produces the platform directories for an application name.
pub trait DirectoryResolver {
    fn resolve(&self, app_name: &str) -> Result<PlatformDirs, DirectoryError>;
}

impl<F> DirectoryResolver for F
where
    F: Fn(&str) -> Result<PlatformDirs, DirectoryError>,
{
    fn resolve(&self, app_name: &str) -> Result<PlatformDirs, DirectoryError> {
        self(app_name)
    }
}

/// Resolver following the host platform's conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppDirs;

impl DirectoryResolver for AppDirs {
    fn resolve(&self, app_name: &str) -> Result<PlatformDirs, DirectoryError> {
        if app_name.trim().is_empty() {
            return Err(DirectoryError::EmptyAppName);
        }

        let home = dirs::home_dir().ok_or(DirectoryError::Unavailable(DirRole::Home))?;
        let data_base = dirs::data_dir().ok_or(DirectoryError::Unavailable(DirRole::Data))?;
        let config_base = dirs::config_dir().ok_or(DirectoryError::Unavailable(DirRole::Config))?;
        let cache_base = dirs::cache_dir().ok_or(DirectoryError::Unavailable(DirRole::Cache))?;

        Ok(platform_layout(app_name, home, data_base, config_base, cache_base))
    }
}

#[cfg(target_os = "macos")]
fn platform_layout(
    app_name: &str,
    home: PathBuf,
    data_base: PathBuf,
    config_base: PathBuf,
    cache_base: PathBuf,
) -> PlatformDirs {
    let site = PathBuf::from("/Library/Application Support").join(app_name);
    PlatformDirs {
        log: home.join("Library").join("Logs").join(app_name),
        home,
        data: data_base.join(app_name),
        site_data: site.clone(),
        config: config_base.join(app_name),
        site_config: site,
        cache: cache_base.join(app_name),
    }
}

#[cfg(windows)]
fn platform_layout(
    app_name: &str,
    home: PathBuf,
    _data_base: PathBuf,
    _config_base: PathBuf,
    _cache_base: PathBuf,
) -> PlatformDirs {
    // Windows keeps config, cache and logs under the local app data root
    let local = dirs::data_local_dir()
        .unwrap_or_else(|| home.join("AppData").join("Local"))
        .join(app_name);
    let program_data = std::env::var_os("PROGRAMDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
        .join(app_name);
    PlatformDirs {
        home,
        data: local.clone(),
        site_data: program_data.clone(),
        config: local.clone(),
        site_config: program_data,
        cache: local.join("Cache"),
        log: local.join("Logs"),
    }
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_layout(
    app_name: &str,
    home: PathBuf,
    data_base: PathBuf,
    config_base: PathBuf,
    cache_base: PathBuf,
) -> PlatformDirs {
    let cache = cache_base.join(app_name);
    PlatformDirs {
        home,
        data: data_base.join(app_name),
        site_data: first_xdg_dir("XDG_DATA_DIRS", "/usr/local/share").join(app_name),
        config: config_base.join(app_name),
        site_config: first_xdg_dir("XDG_CONFIG_DIRS", "/etc/xdg").join(app_name),
        log: cache.join("logs"),
        cache,
    }
}

/// First absolute entry of a colon-separated XDG search path.
#[cfg(not(any(target_os = "macos", windows)))]
fn first_xdg_dir(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .and_then(|value| first_absolute_entry(&value))
        .unwrap_or_else(|| PathBuf::from(default))
}

#[cfg(not(any(target_os = "macos", windows)))]
fn first_absolute_entry(search_path: &str) -> Option<PathBuf> {
    search_path
        .split(':')
        .map(Path::new)
        .find(|entry| entry.is_absolute())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_layout_is_distinct_per_role() {
        let dirs = PlatformDirs::fixed("/fixture");
        let mut seen: Vec<&Path> = DirRole::ALL.iter().map(|r| dirs.get(*r)).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), DirRole::ALL.len());
        assert_eq!(dirs.get(DirRole::SiteConfig), Path::new("/fixture/site-config"));
    }

    #[test]
    fn test_placeholder_roundtrip() {
        for role in DirRole::ALL {
            assert_eq!(DirRole::from_placeholder(role.placeholder()), Some(role));
        }
        assert_eq!(DirRole::from_placeholder("home"), None);
        assert_eq!(DirRole::from_placeholder("Conf"), None);
    }

    #[test]
    fn test_empty_app_name_rejected() {
        let err = AppDirs.resolve("  ").unwrap_err();
        assert!(matches!(err, DirectoryError::EmptyAppName));
    }

    #[test]
    fn test_app_dirs_are_app_specific() {
        // Skip on hosts without a resolvable home (some CI sandboxes)
        let Ok(dirs) = AppDirs.resolve("multiconf-test-app") else {
            return;
        };
        assert!(dirs.data.ends_with("multiconf-test-app"));
        assert!(dirs.config.ends_with("multiconf-test-app"));
        assert!(dirs.site_config.ends_with("multiconf-test-app"));
        assert!(dirs.log.to_string_lossy().contains("multiconf-test-app"));
    }

    #[test]
    fn test_closure_is_a_resolver() {
        let resolver = |app: &str| -> Result<PlatformDirs, DirectoryError> {
            Ok(PlatformDirs::fixed(Path::new("/fixture").join(app)))
        };
        let dirs = resolver.resolve("demo").unwrap();
        assert_eq!(dirs.cache, Path::new("/fixture/demo/cache"));
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    #[test]
    fn test_first_absolute_entry() {
        assert_eq!(
            first_absolute_entry("relative:/usr/share:/opt/share"),
            Some(PathBuf::from("/usr/share"))
        );
        assert_eq!(first_absolute_entry(""), None);
    }
}
