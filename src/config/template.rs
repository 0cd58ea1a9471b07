//! Path template expansion.
//!
//! Templates reference platform directories with `{{.Role}}` placeholders,
//! e.g. `{{.Config}}/app.yaml` or `{{ .Home }}/.apprc`. Expansion is pure
//! string manipulation; no filesystem I/O happens here.

use crate::paths::{DirRole, PlatformDirs};
use std::path::PathBuf;
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Error returned when a path template cannot be expanded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    Empty { offset: usize },

    #[error("placeholder '{placeholder}' must start with '.' (e.g. {{{{.Home}}}})")]
    MissingDot { placeholder: String },

    #[error("unknown placeholder '.{name}', expected one of: {expected}")]
    UnknownRole { name: String, expected: String },
}

/// Expand every placeholder in `template` against the resolved directories.
pub fn expand(template: &str, dirs: &PlatformDirs) -> Result<PathBuf, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let offset = consumed + start;
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(TemplateError::Unterminated { offset })?;

        let role = parse_placeholder(after_open[..end].trim(), offset)?;
        out.push_str(&dirs.get(role).to_string_lossy());

        let advance = start + OPEN.len() + end + CLOSE.len();
        consumed += advance;
        rest = &rest[advance..];
    }
    out.push_str(rest);

    Ok(PathBuf::from(out))
}

fn parse_placeholder(placeholder: &str, offset: usize) -> Result<DirRole, TemplateError> {
    if placeholder.is_empty() {
        return Err(TemplateError::Empty { offset });
    }
    let name = placeholder
        .strip_prefix('.')
        .ok_or_else(|| TemplateError::MissingDot {
            placeholder: placeholder.to_string(),
        })?;

    DirRole::from_placeholder(name).ok_or_else(|| TemplateError::UnknownRole {
        name: name.to_string(),
        expected: DirRole::ALL
            .iter()
            .map(|role| role.placeholder())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn dirs() -> PlatformDirs {
        PlatformDirs::fixed("/root-fixture")
    }

    #[test]
    fn test_literal_template_unchanged() {
        let path = expand("/etc/myapp.conf", &dirs()).unwrap();
        assert_eq!(path, Path::new("/etc/myapp.conf"));
    }

    #[test]
    fn test_all_roles_expand() {
        let dirs = dirs();
        for role in DirRole::ALL {
            let template = format!("{{{{.{}}}}}/file", role.placeholder());
            let path = expand(&template, &dirs).unwrap();
            assert_eq!(path, dirs.get(role).join("file"), "role {}", role);
        }
    }

    #[test]
    fn test_whitespace_inside_placeholder() {
        let path = expand("{{ .Home }}/.myapp.conf", &dirs()).unwrap();
        assert_eq!(path, dirs().home.join(".myapp.conf"));
    }

    #[test]
    fn test_multiple_placeholders() {
        let path = expand("{{.Config}}/{{.Log}}", &dirs()).unwrap();
        let expected = format!(
            "{}/{}",
            dirs().config.display(),
            dirs().log.display()
        );
        assert_eq!(path, PathBuf::from(expected));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = expand("{{.Conf}}/myapp.conf", &dirs()).unwrap_err();
        match err {
            TemplateError::UnknownRole { name, expected } => {
                assert_eq!(name, "Conf");
                assert!(expected.contains("SiteConfig"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_rejected() {
        let err = expand("/etc/{{.Home/app", &dirs()).unwrap_err();
        assert_eq!(err, TemplateError::Unterminated { offset: 5 });
    }

    #[test]
    fn test_missing_dot_rejected() {
        let err = expand("{{Home}}/app", &dirs()).unwrap_err();
        assert!(matches!(err, TemplateError::MissingDot { .. }));
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let err = expand("/a/{{ }}/b", &dirs()).unwrap_err();
        assert_eq!(err, TemplateError::Empty { offset: 3 });
    }

    #[test]
    fn test_single_braces_are_literal() {
        let path = expand("/tmp/{x}/}}", &dirs()).unwrap();
        assert_eq!(path, Path::new("/tmp/{x}/}}"));
    }
}
