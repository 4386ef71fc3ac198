//! The `highlight`/`report` side channel — diagnostics produced alongside (not mixed
//! into) the snippet batch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DslDiagnostic {
    pub rule_id: String,
    pub node_kind: String,
    pub start_line: usize,
    pub message: String,
}
