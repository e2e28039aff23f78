//! Tool-registration surface for host agent frameworks

pub mod collaborate;

pub use collaborate::CollaborateTool;

use async_trait::async_trait;
use cellrepair_client::CollaborationClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

type BoxedTool = Box<dyn ToolTrait + Send + Sync>;

pub type ToolResult = Result<String, Box<dyn std::error::Error + Send + Sync>>;

/// A callable tool as seen by an agent framework
#[async_trait]
pub trait ToolTrait: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// JSON schema of the accepted arguments
    fn parameters(&self) -> Value;
    async fn execute(&self, args: Value) -> ToolResult;
}

/// Function-calling tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDef,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDef {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// Function schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

pub fn to_definition(tool: &dyn ToolTrait) -> ToolDefinition {
    ToolDefinition::new(tool.name(), tool.description(), tool.parameters())
}

/// Tools by name
pub struct ToolRegistry {
    tools: HashMap<String, BoxedTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register<T: ToolTrait + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&(dyn ToolTrait + Send + Sync)> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| to_definition(t.as_ref()))
            .collect()
    }

    pub async fn execute(&self, name: &str, args: Value) -> ToolResult {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| format!("◆ TOOL '{}' NOT FOUND", name))?;
        tool.execute(args).await
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the collaborate tool backed by `client`
pub fn register_collaborate_tool(registry: &mut ToolRegistry, client: CollaborationClient) {
    registry.register(CollaborateTool::new(client));
}
