//! Compiler options.

use chibi_carton::String;
use serde::{Deserialize, Serialize};

/// Codegen options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenOptions {
    /// Emit the render function as an expression returned to the host
    /// (`return function render(..) { .. }`) instead of a declaration
    pub is_browser: bool,
    /// Runtime global the preamble destructures helpers from
    pub runtime_global_name: String,
    /// Record generated-to-source position mappings
    pub source_map: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            is_browser: false,
            runtime_global_name: String::const_new("ChibiVue"),
            source_map: false,
        }
    }
}
