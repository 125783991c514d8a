use calc_agent_model::ModelProvider;

use super::Orchestrator;
use crate::tool::{Registry, Tool};

/// [`Orchestrator`] builder.
pub struct OrchestratorBuilder<P: ModelProvider> {
    provider: P,
    registry: Registry,
    system_prompt: Option<String>,
}

impl<P: ModelProvider> OrchestratorBuilder<P> {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider(provider: P) -> Self {
        Self {
            provider,
            registry: Registry::default(),
            system_prompt: None,
        }
    }

    /// Sets the system instructions seeded ahead of the user message.
    #[inline]
    pub fn with_system_prompt<S: Into<String>>(
        mut self,
        system_prompt: S,
    ) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Registers a tool.
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        self.registry.add_tool(tool);
        self
    }

    /// Builds the orchestrator.
    #[inline]
    pub fn build(self) -> Orchestrator<P> {
        Orchestrator {
            provider: self.provider,
            registry: self.registry,
            system_prompt: self.system_prompt,
        }
    }
}
