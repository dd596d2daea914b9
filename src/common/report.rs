use colored::Colorize;
use serde::Serialize;

use crate::network::{NetworkModel, Query, QueryError};

/// Outcome of one textual query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryOutcome {
    fn evaluate(model: &NetworkModel, text: &str) -> Self {
        let result = text.parse::<Query>().and_then(|query| {
            let probability = model.infer(&query)?;
            Ok::<_, QueryError>((query.to_string(), probability))
        });
        match result {
            Ok((query, probability)) => QueryOutcome {
                query,
                probability: Some(probability),
                error: None,
            },
            Err(err) => QueryOutcome {
                query: text.to_string(),
                probability: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Everything the binary prints about a model and its queries.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceReport {
    pub compact: String,
    pub variables: Vec<String>,
    pub queries: Vec<QueryOutcome>,
}

impl InferenceReport {
    /// Evaluates each query independently; failures are recorded, not raised.
    pub fn build(model: &NetworkModel, queries: &[String]) -> Self {
        InferenceReport {
            compact: model.compact_representation().to_string(),
            variables: model.variables().map(str::to_string).collect(),
            queries: queries
                .iter()
                .map(|text| QueryOutcome::evaluate(model, text))
                .collect(),
        }
    }

    pub fn failures(&self) -> usize {
        self.queries.iter().filter(|q| q.error.is_some()).count()
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![format!("{} {}", "Factorization:".bold(), self.compact.green())];
        for outcome in &self.queries {
            match (&outcome.probability, &outcome.error) {
                (Some(p), _) => lines.push(format!("{} = {}", outcome.query, format!("{:.6}", p).blue())),
                (None, Some(err)) => lines.push(format!("{}: {}", outcome.query, err.red())),
                (None, None) => {}
            }
        }
        lines.join("\n")
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
