//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::future::ready;
use std::sync::{Arc, Mutex};

use calc_agent_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct State {
    script: VecDeque<PresetReply>,
    requests: Vec<ModelRequest>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to set up the reply script, which
/// is how the model responds to the incoming requests, in order. Every
/// request consumes one scripted reply; a request beyond the end of
/// the script fails with an error.
///
/// The provider also records every request it receives, so tests can
/// assert how many requests were issued and what they carried.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy
/// memory copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    state: Arc<Mutex<State>>,
}

impl TestModelProvider {
    /// Appends a reply to the end of the script.
    pub fn add_reply(&self, reply: PresetReply) {
        self.state.lock().unwrap().script.push_back(reply);
    }

    /// Returns all requests received so far, in arrival order.
    pub fn recorded_requests(&self) -> Vec<ModelRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

impl ModelProvider for TestModelProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        let mut state = self.state.lock().unwrap();
        state.requests.push(req.clone());
        let reply = state.script.pop_front();
        ready(match reply {
            Some(preset) => Ok(ModelReply {
                content: preset.content,
                tool_calls: preset.tool_calls,
            }),
            None => Err(Error {
                message: "the reply script is exhausted",
                kind: ErrorKind::Other,
            }),
        })
    }
}
