use serde::{Deserialize, Serialize};

/// Describes a tool call request from the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The unique identifier for the tool call request.
    pub id: String,
    /// The name of the tool to call.
    pub name: String,
    /// The arguments to pass to the function, as the JSON-encoded
    /// string the wire carries. Decoding is deferred to the tool
    /// dispatch site, where the payload can be validated against the
    /// tool's typed input.
    pub arguments: String,
}

/// One complete assistant turn from the model provider.
///
/// Providers deliver the turn as a whole; there is no incremental
/// delivery in this protocol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelReply {
    /// The assistant text, if the model produced any.
    pub content: Option<String>,
    /// Tool calls requested by the model, in the order they were
    /// produced.
    pub tool_calls: Vec<ToolCallRequest>,
}

impl ModelReply {
    /// Returns `true` if this reply requests at least one tool call.
    #[inline]
    pub fn wants_tools(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}
