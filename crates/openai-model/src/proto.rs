use calc_agent_model::{
    ModelMessage, ModelReply, ModelRequest, ModelTool, ToolCallRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::OpenAIConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionToolCall {
    pub name: String,
    // The arguments stay a JSON-encoded string, round-tripped verbatim.
    pub arguments: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub r#type: String,
    pub function: FunctionToolCall,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<ToolCall>>,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct FunctionTool {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct Tool {
    r#type: &'static str,
    function: FunctionTool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },
    Tool {
        tool_call_id: String,
        name: String,
        content: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &OpenAIConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: req.messages.iter().map(create_message).collect(),
        tool_choice: if req.tools.is_empty() {
            None
        } else {
            Some("auto")
        },
        tools: req.tools.iter().map(create_tool).collect(),
    }
}

#[inline]
fn create_message(msg: &ModelMessage) -> Message {
    match msg {
        ModelMessage::System(content) => Message::System {
            content: content.clone(),
        },
        ModelMessage::User(content) => Message::User {
            content: content.clone(),
        },
        ModelMessage::Assistant {
            content,
            tool_calls,
        } => Message::Assistant {
            content: content.clone(),
            tool_calls: if tool_calls.is_empty() {
                None
            } else {
                Some(tool_calls.iter().map(create_tool_call).collect())
            },
        },
        ModelMessage::Tool(result) => Message::Tool {
            tool_call_id: result.id.clone(),
            name: result.name.clone(),
            content: result.content.clone(),
        },
    }
}

#[inline]
fn create_tool(tool: &ModelTool) -> Tool {
    Tool {
        r#type: "function",
        function: FunctionTool {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.parameters.clone(),
        },
    }
}

#[inline]
fn create_tool_call(req: &ToolCallRequest) -> ToolCall {
    ToolCall {
        id: req.id.clone(),
        r#type: "function".to_owned(),
        function: FunctionToolCall {
            name: req.name.clone(),
            arguments: req.arguments.clone(),
        },
    }
}

/// Extracts the assistant turn from a chat completion body.
///
/// Returns `None` when the body carries no choices.
#[inline]
pub fn parse_reply(body: ChatCompletion) -> Option<ModelReply> {
    let choice = body.choices.into_iter().next()?;
    let tool_calls = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| ToolCallRequest {
            id: call.id,
            name: call.function.name,
            arguments: call.function.arguments,
        })
        .collect();
    Some(ModelReply {
        content: choice.message.content,
        tool_calls,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::OpenAIConfigBuilder;

    #[test]
    fn test_create_request() {
        let request = ModelRequest {
            messages: vec![
                ModelMessage::System("You are a helpful assistant.".to_owned()),
                ModelMessage::User("Hello".to_owned()),
            ],
            tools: vec![ModelTool {
                name: "calculator".to_owned(),
                description: "Performs basic arithmetic.".to_owned(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "a": { "type": "number" }
                    }
                }),
            }],
        };
        let config = OpenAIConfigBuilder::with_api_key("xxx")
            .with_model("custom")
            .build();
        let expected = json!({
            "model": "custom",
            "messages": [
                { "role": "system", "content": "You are a helpful assistant." },
                { "role": "user", "content": "Hello" },
            ],
            "tools": [{
                "type": "function",
                "function": {
                    "name": "calculator",
                    "description": "Performs basic arithmetic.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "a": { "type": "number" }
                        }
                    }
                }
            }],
            "tool_choice": "auto",
        });
        let actual =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_create_request_without_tools() {
        let request = ModelRequest {
            messages: vec![ModelMessage::User("Hello".to_owned())],
            tools: vec![],
        };
        let config = OpenAIConfigBuilder::with_api_key("xxx").build();
        let actual =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        // The tool catalog and tool-choice mode must be absent, not
        // empty, to match what the endpoint expects.
        assert_eq!(
            actual,
            json!({
                "model": "gpt-4o-mini",
                "messages": [{ "role": "user", "content": "Hello" }],
            })
        );
    }

    #[test]
    fn test_tool_call_round_trips_verbatim() {
        let request = ModelRequest {
            messages: vec![ModelMessage::Assistant {
                content: None,
                tool_calls: vec![ToolCallRequest {
                    id: "call_abc".to_owned(),
                    name: "calculator".to_owned(),
                    arguments: r#"{"a":42,"b":19.5,"operation":"multiply"}"#
                        .to_owned(),
                }],
            }],
            tools: vec![],
        };
        let config = OpenAIConfigBuilder::with_api_key("xxx").build();
        let actual =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        assert_eq!(
            actual["messages"][0],
            json!({
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_abc",
                    "type": "function",
                    "function": {
                        "name": "calculator",
                        "arguments": "{\"a\":42,\"b\":19.5,\"operation\":\"multiply\"}"
                    }
                }]
            })
        );
    }

    #[test]
    fn test_parse_reply_with_tool_calls() {
        let body: ChatCompletion = serde_json::from_value(json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "calculator",
                            "arguments": "{\"a\":1,\"b\":2,\"operation\":\"add\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }))
        .unwrap();
        let reply = parse_reply(body).unwrap();
        assert_eq!(reply.content, None);
        assert_eq!(reply.tool_calls.len(), 1);
        assert_eq!(reply.tool_calls[0].id, "call_abc");
        assert_eq!(reply.tool_calls[0].name, "calculator");

        let body: ChatCompletion = serde_json::from_value(json!({
            "choices": [{
                "message": { "content": "Hi there!" },
                "finish_reason": "stop"
            }]
        }))
        .unwrap();
        let reply = parse_reply(body).unwrap();
        assert_eq!(reply.content.as_deref(), Some("Hi there!"));
        assert!(!reply.wants_tools());

        let body: ChatCompletion =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(parse_reply(body).is_none());
    }
}
