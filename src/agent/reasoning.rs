//! The reasoning seam and a deterministic keyword reasoner.
//!
//! The session treats the reasoning component as a black box behind the
//! `Reasoner` trait: given a free-form request and the catalog, it returns an
//! ordered list of invocations (possibly empty), and later a human-readable
//! summary of the results. `KeywordReasoner` is the reference implementation
//! used by the CLI harness and the tests; a language-model-backed reasoner
//! would implement the same trait.

use async_trait::async_trait;

use super::provider::ToolOutcome;
use super::{AgentError, Invocation, ToolCatalog};

/// The outcome of resolving one request.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Invocations to dispatch, in order.
    pub invocations: Vec<Invocation>,
}

impl Resolution {
    /// A resolution with a single invocation.
    pub fn single(invocation: Invocation) -> Self {
        Self {
            invocations: vec![invocation],
        }
    }
}

/// Maps free-form requests to invocations and results back to prose.
#[async_trait]
pub trait Reasoner: Send + Sync {
    /// Resolve a request into zero or more invocations against the catalog.
    async fn resolve(
        &self,
        request: &str,
        catalog: &ToolCatalog,
    ) -> Result<Resolution, AgentError>;

    /// Produce the user-facing answer once all invocations have results.
    async fn summarize(&self, request: &str, outcomes: &[(Invocation, ToolOutcome)]) -> String;
}

/// A deterministic reasoner that matches arithmetic phrasings by keyword.
///
/// It recognizes one operation per request and pulls its operands from the
/// numbers appearing in the text, in order. Only operations present in the
/// catalog are ever proposed.
#[derive(Debug, Default)]
pub struct KeywordReasoner;

impl KeywordReasoner {
    pub fn new() -> Self {
        Self
    }

    fn resolve_keywords(request: &str, catalog: &ToolCatalog) -> Result<Invocation, AgentError> {
        let lower = request.to_lowercase();
        let numbers = extract_numbers(&lower);

        // Unary operation first: "square root of 144" also contains "of",
        // which must not be mistaken for anything else.
        if lower.contains("square root") || lower.contains("sqrt") {
            let x = *numbers.first().ok_or_else(|| {
                AgentError::resolution("square root needs one number".to_string())
            })?;
            return build(catalog, "square_root", &[("x", x)]);
        }

        let (name, params): (&str, [&str; 2]) =
            if contains_any(&lower, &["power", "raised", "exponent", "^"]) {
                ("power", ["base", "exponent"])
            } else if contains_any(&lower, &["divided", "divide", "quotient"]) {
                ("divide", ["x", "y"])
            } else if contains_any(&lower, &["times", "multiplied", "multiply", "product"]) {
                ("multiply", ["x", "y"])
            } else if contains_any(&lower, &["plus", "add", "sum", "total", "altogether"]) {
                ("add", ["x", "y"])
            } else if contains_any(
                &lower,
                &["minus", "subtract", "difference", "spend", "spent", "left", "less"],
            ) {
                ("subtract", ["x", "y"])
            } else {
                return Err(AgentError::resolution(format!(
                    "no arithmetic operation recognized in \"{}\"",
                    request.trim()
                )));
            };

        if numbers.len() < 2 {
            return Err(AgentError::resolution(format!(
                "'{}' needs two numbers, found {}",
                name,
                numbers.len()
            )));
        }

        build(
            catalog,
            name,
            &[(params[0], numbers[0]), (params[1], numbers[1])],
        )
    }
}

/// Build an invocation, refusing operations the provider did not advertise.
fn build(catalog: &ToolCatalog, name: &str, args: &[(&str, f64)]) -> Result<Invocation, AgentError> {
    if !catalog.contains(name) {
        return Err(AgentError::resolution(format!(
            "the provider does not expose an '{}' operation",
            name
        )));
    }
    let mut invocation = Invocation::new(name);
    for (key, value) in args {
        invocation = invocation.with_number(key, *value);
    }
    Ok(invocation)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Pull the numbers out of a request, in order of appearance.
fn extract_numbers(text: &str) -> Vec<f64> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-')))
        // A sentence-ending period survives the trim above ("2.5." stays
        // "2.5."); strip it so the token still parses.
        .map(|token| token.trim_end_matches('.'))
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse().ok())
        .collect()
}

#[async_trait]
impl Reasoner for KeywordReasoner {
    async fn resolve(
        &self,
        request: &str,
        catalog: &ToolCatalog,
    ) -> Result<Resolution, AgentError> {
        let invocation = Self::resolve_keywords(request, catalog)?;
        Ok(Resolution::single(invocation))
    }

    async fn summarize(&self, _request: &str, outcomes: &[(Invocation, ToolOutcome)]) -> String {
        if outcomes.is_empty() {
            return "No tool calls were needed for this request.".to_string();
        }

        outcomes
            .iter()
            .map(|(invocation, outcome)| match outcome {
                ToolOutcome::Success(text) => format!("{} = {}", invocation.describe(), text),
                ToolOutcome::Failure(message) => {
                    format!("{} failed: {}", invocation.describe(), message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
