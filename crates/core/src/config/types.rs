use serde::{Deserialize, Serialize};

use crate::orchestrator::{FileGroup, RevisionOptions};
use crate::relocator::RelocatorConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub options: RevisionOptions,
    #[serde(default)]
    pub relocator: RelocatorConfig,
    #[serde(default)]
    pub groups: Vec<FileGroup>,
}
