//! Configuration loader with ordered, layered merging.
//!
//! A [`Multiconf`] owns a list of path templates and a parser. Each call to
//! [`Multiconf::load`] resolves the platform directories, walks the templates
//! in order and deep-merges every file it can find into a fresh root mapping.

use super::merge::{Precedence, merge_into};
use super::parser::{Mapping, Parser};
use super::template::expand;
use crate::error::{LoadError, LoadResult};
use crate::paths::{AppDirs, DirectoryError, DirectoryResolver, PlatformDirs};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Layered configuration aggregator.
///
/// Not synchronized: serialize calls to [`load`](Self::load) on one instance.
pub struct Multiconf {
    app_name: String,
    templates: Vec<String>,
    parser: Box<dyn Parser>,
    resolver: Box<dyn DirectoryResolver>,
    precedence: Precedence,
    /// Merged configuration from the most recent load
    root: Mapping,
    /// Files merged during the most recent load, in order
    loaded_files: Vec<PathBuf>,
}

impl Multiconf {
    /// Create a loader for `app_name` reading `templates` with `parser`.
    ///
    /// Templates may reference `{{.Home}}`, `{{.Data}}`, `{{.SiteData}}`,
    /// `{{.Config}}`, `{{.SiteConfig}}`, `{{.Cache}}` and `{{.Log}}`.
    /// Nothing is resolved or read until [`load`](Self::load) is called.
    pub fn new<P, I, S>(app_name: impl Into<String>, parser: P, templates: I) -> Self
    where
        P: Parser + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_boxed_parser(app_name, Box::new(parser), templates)
    }

    /// Same as [`new`](Self::new), for a parser chosen at runtime.
    pub fn with_boxed_parser<I, S>(
        app_name: impl Into<String>,
        parser: Box<dyn Parser>,
        templates: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            app_name: app_name.into(),
            templates: templates.into_iter().map(Into::into).collect(),
            parser,
            resolver: Box::new(AppDirs),
            precedence: Precedence::default(),
            root: Mapping::new(),
            loaded_files: Vec::new(),
        }
    }

    /// Replace the platform directory resolver.
    pub fn with_resolver(mut self, resolver: impl DirectoryResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Resolve directories to a fixed set, ignoring the host platform.
    pub fn with_dirs(self, dirs: PlatformDirs) -> Self {
        self.with_resolver(move |_: &str| -> Result<PlatformDirs, DirectoryError> {
            Ok(dirs.clone())
        })
    }

    /// Set how conflicting values between files are resolved.
    pub fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Load and merge every existing file.
    ///
    /// Missing and unreadable files are skipped. Directory resolution,
    /// template expansion and parse failures abort the load; the root is
    /// then left reset but incomplete and should not be used.
    pub fn load(&mut self) -> LoadResult<()> {
        // reset root; a failed load never exposes the previous result
        self.root = Mapping::new();
        self.loaded_files.clear();

        let dirs = self.resolver.resolve(&self.app_name)?;

        for (index, template) in self.templates.iter().enumerate() {
            let path = expand(template, &dirs).map_err(|source| LoadError::TemplateExpansion {
                index,
                template: template.clone(),
                source,
            })?;

            let Some(raw) = read_source(&path) else {
                continue;
            };

            let source = self
                .parser
                .parse(&raw)
                .map_err(|source| LoadError::Parse {
                    path: path.clone(),
                    source,
                })?;

            debug!(path = %path.display(), keys = source.len(), "Merging configuration file");
            merge_into(&mut self.root, source, self.precedence);
            self.loaded_files.push(path);
        }

        info!(
            app = %self.app_name,
            merged = self.loaded_files.len(),
            templates = self.templates.len(),
            precedence = %self.precedence,
            "Configuration loaded"
        );
        Ok(())
    }

    /// The merged configuration.
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Consume the loader and return the merged configuration.
    pub fn into_root(self) -> Mapping {
        self.root
    }

    /// Files merged by the most recent load, in merge order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }
}

impl std::fmt::Debug for Multiconf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multiconf")
            .field("app_name", &self.app_name)
            .field("templates", &self.templates)
            .field("precedence", &self.precedence)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Read a source file, or `None` if it is absent or unreadable.
///
/// Absence and read failures are deliberately treated alike.
fn read_source(path: &Path) -> Option<Vec<u8>> {
    if !path.is_file() {
        debug!(path = %path.display(), "Configuration file not found, skipping");
        return None;
    }
    match std::fs::read(path) {
        Ok(raw) => Some(raw),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Configuration file unreadable, skipping");
            None
        }
    }
}
