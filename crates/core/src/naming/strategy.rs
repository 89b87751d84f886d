//! Naming strategies.

use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Produces the revisioned file name for a file.
pub trait NamingStrategy: Send + Sync {
    /// Returns the full new file name.
    ///
    /// `ext` has no leading dot and is empty when the file has no extension.
    fn file_name(&self, base: &str, suffix: &str, ext: &str) -> String;
}

/// `base.suffix.ext`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl NamingStrategy for DefaultNaming {
    fn file_name(&self, base: &str, suffix: &str, ext: &str) -> String {
        if ext.is_empty() {
            format!("{base}.{suffix}")
        } else {
            format!("{base}.{suffix}.{ext}")
        }
    }
}

/// Wraps a user supplied closure.
///
/// The returned name is used as-is: collisions and path safety are the
/// caller's concern.
pub struct FnNaming<F>(pub F);

impl<F> NamingStrategy for FnNaming<F>
where
    F: Fn(&str, &str, &str) -> String + Send + Sync,
{
    fn file_name(&self, base: &str, suffix: &str, ext: &str) -> String {
        (self.0)(base, suffix, ext)
    }
}

impl<F> fmt::Debug for FnNaming<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnNaming(..)")
    }
}

/// Template with `{name}`, `{hash}` and `{ext}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNaming {
    template: String,
}

impl TemplateNaming {
    /// Builds a template strategy. Returns `None` without a `{hash}` placeholder.
    pub fn new(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        template
            .contains("{hash}")
            .then_some(Self { template })
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl NamingStrategy for TemplateNaming {
    fn file_name(&self, base: &str, suffix: &str, ext: &str) -> String {
        self.template
            .replace("{name}", base)
            .replace("{hash}", suffix)
            .replace("{ext}", ext)
    }
}

/// Non-fatal problem found while resolving the naming option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub option: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "options.{} {}", self.option, self.message)
    }
}

/// Resolves the configured `process` value into a strategy.
///
/// Anything that is not a template string containing `{hash}` falls back to
/// [`DefaultNaming`] and yields a warning for the caller to report.
pub fn from_config(
    value: Option<&Value>,
) -> (Arc<dyn NamingStrategy>, Option<ConfigWarning>) {
    let Some(value) = value else {
        return (Arc::new(DefaultNaming), None);
    };

    let warning = match value {
        Value::Null => return (Arc::new(DefaultNaming), None),
        Value::String(template) => match TemplateNaming::new(template.as_str()) {
            Some(naming) => return (Arc::new(naming), None),
            None => format!("template {template:?} has no {{hash}} placeholder; ignoring"),
        },
        other => format!("must be a naming template, got {other}; ignoring"),
    };

    (
        Arc::new(DefaultNaming),
        Some(ConfigWarning {
            option: "process",
            message: warning,
        }),
    )
}

/// Splits a path's file name into base name and extension (without the dot).
///
/// A leading dot does not start an extension, so `.htaccess` has none.
pub fn split_file_name(path: &Path) -> (String, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) if idx > 0 => (name[..idx].to_string(), name[idx + 1..].to_string()),
        _ => (name, String::new()),
    }
}

/// Synthesizes a name, using [`DefaultNaming`] when no strategy is given.
pub fn synthesize(
    base: &str,
    suffix: &str,
    ext: &str,
    strategy: Option<&dyn NamingStrategy>,
) -> String {
    match strategy {
        Some(strategy) => strategy.file_name(base, suffix, ext),
        None => DefaultNaming.file_name(base, suffix, ext),
    }
}
