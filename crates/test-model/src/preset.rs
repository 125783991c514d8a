use calc_agent_model::ToolCallRequest;
use serde::{Deserialize, Serialize};

/// A canned assistant reply for the scripted test model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// The assistant text, if any.
    pub content: Option<String>,
    /// Tool calls the fake model requests with this reply.
    pub tool_calls: Vec<ToolCallRequest>,
}

impl PresetReply {
    /// Creates a text-only reply.
    #[inline]
    pub fn with_content<S: Into<String>>(content: S) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: vec![],
        }
    }

    /// Creates a reply that requests the given tool calls.
    #[inline]
    pub fn with_tool_calls(
        tool_calls: impl Into<Vec<ToolCallRequest>>,
    ) -> Self {
        Self {
            content: None,
            tool_calls: tool_calls.into(),
        }
    }
}
