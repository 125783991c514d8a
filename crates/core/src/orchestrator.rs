mod builder;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

use calc_agent_model::{
    ModelMessage, ModelProvider, ModelReply, ModelRequest, ModelTool,
    ToolCallRequest, ToolCallResult,
};

use crate::conversation::Conversation;
use crate::tool;
pub use builder::OrchestratorBuilder;

/// The stage a conversation run is currently in.
///
/// A run starts by awaiting the model's decision whether to use a tool.
/// When the first reply carries no tool calls, the run is done right
/// there; otherwise the requested tools are executed and a final answer
/// is awaited.
enum Stage {
    AwaitingToolDecision,
    ExecutingTools(Vec<ToolCallRequest>),
    AwaitingFinalAnswer,
}

/// The error type for a conversation run.
///
/// Any of these aborts the run; there are no retries. Note that a tool
/// returning a descriptive error text (say, a division by zero) is not
/// an error at this level, it flows back to the model as a regular
/// tool result.
#[derive(Debug)]
pub enum RunError<E> {
    /// The model provider failed during either request.
    Model(E),
    /// A tool rejected its argument payload or failed while executing.
    Tool(tool::Error),
    /// The model produced a reply with neither text nor tool calls.
    EmptyReply,
}

impl<E: Display> Display for RunError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Model(err) => write!(f, "model provider error: {err}"),
            RunError::Tool(err) => {
                write!(f, "tool error: {}", err.reason())
            }
            RunError::EmptyReply => {
                write!(f, "the model replied with no content")
            }
        }
    }
}

impl<E: Display + Debug> StdError for RunError<E> {}

/// The outcome of a completed conversation run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// The final natural-language answer.
    pub answer: String,
    /// The full message history of the run.
    pub conversation: Conversation,
}

/// Drives a single user prompt through one tool-calling round trip.
///
/// The orchestrator owns the model provider and the tool registry, but
/// no conversation state: every [`run`](Orchestrator::run) constructs
/// its own fresh history, so one orchestrator can serve any number of
/// independent runs.
pub struct Orchestrator<P: ModelProvider> {
    provider: P,
    registry: tool::Registry,
    system_prompt: Option<String>,
}

impl<P: ModelProvider> Orchestrator<P> {
    /// Runs one conversation for the given user prompt and resolves to
    /// the final answer.
    ///
    /// The model is offered the registered tool catalog on the first
    /// request and decides on its own whether to use it. Requested
    /// tool calls are executed sequentially in request order, and each
    /// executed call appends exactly one tool message carrying the
    /// original correlation identifier. Calls naming an unregistered
    /// tool are logged and skipped.
    pub async fn run(
        &self,
        prompt: &str,
    ) -> Result<RunOutcome, RunError<P::Error>> {
        let mut conversation = Conversation::default();
        if let Some(system_prompt) = &self.system_prompt {
            conversation.append(ModelMessage::System(system_prompt.clone()));
        }
        conversation.append(ModelMessage::User(prompt.to_owned()));

        let mut stage = Stage::AwaitingToolDecision;
        loop {
            stage = match stage {
                Stage::AwaitingToolDecision => {
                    let reply = self
                        .request(&conversation, self.registry.definitions())
                        .await?;
                    if !reply.wants_tools() {
                        // The model answered directly, no second
                        // request is needed.
                        return Self::finish(conversation, reply);
                    }

                    debug!(
                        "the model requested {} tool call(s)",
                        reply.tool_calls.len()
                    );
                    conversation.append(ModelMessage::Assistant {
                        content: reply.content,
                        tool_calls: reply.tool_calls.clone(),
                    });
                    Stage::ExecutingTools(reply.tool_calls)
                }
                Stage::ExecutingTools(requests) => {
                    for req in requests {
                        let Some(fut) = self.registry.dispatch(&req) else {
                            // Unknown tools are skipped; the remaining
                            // requests are still processed.
                            continue;
                        };
                        let content =
                            fut.await.map_err(RunError::Tool)?;
                        info!("tool {} returned: {content}", req.name);
                        conversation.append(ModelMessage::Tool(
                            ToolCallResult {
                                id: req.id,
                                name: req.name,
                                content,
                            },
                        ));
                    }
                    Stage::AwaitingFinalAnswer
                }
                Stage::AwaitingFinalAnswer => {
                    // The tool catalog is no longer offered here.
                    let reply = self.request(&conversation, vec![]).await?;
                    return Self::finish(conversation, reply);
                }
            };
        }
    }

    async fn request(
        &self,
        conversation: &Conversation,
        tools: Vec<ModelTool>,
    ) -> Result<ModelReply, RunError<P::Error>> {
        let req = ModelRequest {
            messages: conversation.messages().to_vec(),
            tools,
        };
        trace!("sending a request: {req:?}");
        self.provider.send_request(&req).await.map_err(RunError::Model)
    }

    fn finish(
        mut conversation: Conversation,
        reply: ModelReply,
    ) -> Result<RunOutcome, RunError<P::Error>> {
        let Some(answer) = reply.content else {
            return Err(RunError::EmptyReply);
        };
        conversation.append(ModelMessage::Assistant {
            content: Some(answer.clone()),
            tool_calls: vec![],
        });
        Ok(RunOutcome {
            answer,
            conversation,
        })
    }
}
