//! Conversation-related types.

use calc_agent_model::ModelMessage;

/// The ordered message history of one conversation run.
///
/// The log is append-only: messages are never reordered or mutated
/// after insertion, and the full log forms the context sent with every
/// model request.
#[derive(Clone, Default, Debug)]
pub struct Conversation {
    items: Vec<ModelMessage>,
}

impl Conversation {
    /// Appends a message to the end of the log.
    #[inline]
    pub(crate) fn append(&mut self, msg: ModelMessage) {
        self.items.push(msg);
    }

    /// Returns the messages in insertion order.
    #[inline]
    pub fn messages(&self) -> &[ModelMessage] {
        &self.items
    }

    /// Returns the correlation identifiers of tool call requests that
    /// are not yet answered by a tool message.
    ///
    /// A well-formed history answers every dispatched request exactly
    /// once before the next model request; requests that named an
    /// unregistered tool are the only ones that may stay unanswered.
    pub fn unanswered_tool_calls(&self) -> Vec<&str> {
        let mut pending: Vec<&str> = vec![];
        for msg in &self.items {
            match msg {
                ModelMessage::Assistant { tool_calls, .. } => {
                    pending.extend(tool_calls.iter().map(|c| c.id.as_str()));
                }
                ModelMessage::Tool(result) => {
                    pending.retain(|id| *id != result.id);
                }
                _ => {}
            }
        }
        pending
    }
}
