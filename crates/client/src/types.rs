//! Collaborate endpoint wire types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body posted to the collaborate endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborateRequest {
    pub system: String,
    pub query: String,
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl CollaborateRequest {
    pub fn new(
        system: impl Into<String>,
        query: impl Into<String>,
        context: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            system: system.into(),
            query: query.into(),
            context: context.unwrap_or_default(),
        }
    }
}

/// Successful collaborate response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborateResponse {
    pub insight: Insight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents_consulted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictive_intelligence: Option<PredictiveIntelligence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_exchange: Option<LearningExchange>,
}

impl CollaborateResponse {
    /// Follow-up questions the service anticipates, in service order
    pub fn next_questions(&self) -> &[String] {
        self.predictive_intelligence
            .as_ref()
            .and_then(|p| p.you_will_probably_ask_next.as_deref())
            .unwrap_or(&[])
    }

    /// Whether both sides reported improvement from the exchange
    pub fn both_improved(&self) -> bool {
        self.learning_exchange
            .as_ref()
            .and_then(|l| l.both_systems_improved)
            .unwrap_or(false)
    }
}

/// Structured recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub recommendation: String,
    /// Fraction in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi_estimate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictiveIntelligence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub you_will_probably_ask_next: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LearningExchange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub both_systems_improved: Option<bool>,
}
