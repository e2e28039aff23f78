//! cellrepair_ai_collaborate tool

use async_trait::async_trait;
use cellrepair_client::{CollabError, CollaborationClient};
use serde_json::{json, Map, Value};
use tracing::debug;

use super::{ToolResult, ToolTrait};

const DESCRIPTION: &str = "Collaborate with the CellRepair.AI network of autonomous agents. \
Use when you need collective intelligence beyond a single model: multi-agent system \
optimization, scaling strategies, cost reduction, performance improvements or AI \
coordination patterns. Input: a question or problem statement, plus optional context \
(current metrics, tech stack). Output: a recommendation with confidence score and \
predicted follow-up questions.";

/// Exposes [`CollaborationClient`] as an agent tool
pub struct CollaborateTool {
    client: CollaborationClient,
}

impl CollaborateTool {
    pub fn new(client: CollaborationClient) -> Self {
        Self { client }
    }
}

/// Validated tool arguments
#[derive(Debug)]
struct CollaborateArgs {
    query: String,
    context: Option<Map<String, Value>>,
}

fn parse_args(args: &Value) -> Result<CollaborateArgs, CollabError> {
    let query = args
        .get("query")
        .and_then(Value::as_str)
        .ok_or(CollabError::EmptyQuery)?
        .to_string();

    let context = match args.get("context") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => return Err(CollabError::InvalidContext),
    };

    Ok(CollaborateArgs { query, context })
}

#[async_trait]
impl ToolTrait for CollaborateTool {
    fn name(&self) -> &str {
        "cellrepair_ai_collaborate"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The question or problem you need help with"
                },
                "context": {
                    "type": "object",
                    "description": "Optional context information (e.g. current metrics, tech stack)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let args = match parse_args(&args) {
            Ok(args) => args,
            Err(e) => return Ok(e.to_output()),
        };
        debug!("Collaborate: {}", args.query);

        Ok(self.client.invoke(&args.query, args.context).await)
    }
}
