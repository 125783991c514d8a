use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use calc_agent_model::{ModelTool, ToolCallRequest};

use crate::tool::object::{ToolObject, ToolObjectImpl};
use crate::tool::{Tool, ToolResult};

/// Maps declared tool names to their local implementations.
///
/// Only tools registered here are ever executed; a request naming
/// anything else resolves to nothing and is expected to be skipped by
/// the caller.
#[derive(Default)]
pub struct Registry {
    tools: HashMap<String, Arc<dyn ToolObject>>,
}

impl Registry {
    /// Registers a tool under the name it declares.
    pub fn add_tool<T: Tool>(&mut self, tool: T) {
        let name = tool.name().to_owned();
        self.tools.insert(name, Arc::new(ToolObjectImpl(tool)));
    }

    /// Returns the static tool catalog to declare with a model request.
    #[inline]
    pub fn definitions(&self) -> Vec<ModelTool> {
        self.tools
            .values()
            .map(|tool| ModelTool {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                parameters: tool.parameter_schema().clone(),
            })
            .collect()
    }

    /// Resolves a tool call request and returns the execution future.
    ///
    /// Returns `None` when the requested name was never registered.
    pub fn dispatch(
        &self,
        req: &ToolCallRequest,
    ) -> Option<Pin<Box<dyn Future<Output = ToolResult> + Send>>> {
        let Some(tool) = self.tools.get(&req.name) else {
            warn!("tool not found: {}", req.name);
            return None;
        };

        trace!(
            "dispatching a tool ({}) with args: {}",
            req.id, req.arguments
        );
        Some(Arc::clone(tool).execute(&req.arguments))
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use serde::Deserialize;
    use serde_json::{Value, json};

    use super::*;
    use crate::tool::ErrorKind;

    static EMPTY_SCHEMA: &Value = &Value::Null;

    #[derive(Deserialize)]
    struct TestToolInput {
        text: String,
    }

    struct TestTool;

    impl Tool for TestTool {
        type Input = TestToolInput;

        fn name(&self) -> &str {
            "test_tool"
        }

        fn description(&self) -> &str {
            "A test tool"
        }

        fn parameter_schema(&self) -> &Value {
            EMPTY_SCHEMA
        }

        fn execute(
            &self,
            input: TestToolInput,
        ) -> impl Future<Output = ToolResult> + Send + 'static {
            ready(Ok(input.text))
        }
    }

    #[tokio::test]
    async fn test_dispatch() {
        let mut registry = Registry::default();
        registry.add_tool(TestTool);

        let request = ToolCallRequest {
            id: "call:0".to_owned(),
            name: "test_tool".to_owned(),
            arguments: json!({ "text": "hello" }).to_string(),
        };
        let result = registry.dispatch(&request).unwrap().await;
        assert_eq!(result.unwrap(), "hello");

        // Unregistered names must resolve to nothing.
        let request = ToolCallRequest {
            id: "call:1".to_owned(),
            name: "other_tool".to_owned(),
            arguments: "{}".to_owned(),
        };
        assert!(registry.dispatch(&request).is_none());
    }

    #[tokio::test]
    async fn test_dispatch_with_malformed_arguments() {
        let mut registry = Registry::default();
        registry.add_tool(TestTool);

        let request = ToolCallRequest {
            id: "call:0".to_owned(),
            name: "test_tool".to_owned(),
            arguments: "not json".to_owned(),
        };
        let err = registry.dispatch(&request).unwrap().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_definitions() {
        let mut registry = Registry::default();
        registry.add_tool(TestTool);

        let definitions = registry.definitions();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "test_tool");
        assert_eq!(definitions[0].description, "A test tool");
    }
}
