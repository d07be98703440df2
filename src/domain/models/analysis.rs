use serde::{Deserialize, Serialize};

/// The analysis service's markdown-bearing reply.
///
/// `content` is the full markdown document and is trusted as-is; `role`
/// labels the responder (the upstream chat API's message role, typically
/// `assistant`). Deserialized verbatim from the `/analyze` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    content: String,
    role: String,
}

impl AnalysisReport {
    pub fn new(content: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: role.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}
