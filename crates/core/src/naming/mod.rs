//! Name synthesis for revisioned files.
//!
//! A [`NamingStrategy`] turns `(base name, fingerprint suffix, extension)` into
//! the final file name. The strategy is resolved once when options are
//! validated, never per file.

mod strategy;

pub use strategy::{
    from_config, split_file_name, synthesize, ConfigWarning, DefaultNaming, FnNaming,
    NamingStrategy, TemplateNaming,
};
