//! MCP tools over the readability engine.
//!
//! Three tools are exposed: `get_info`, `analyze_readability` and
//! `count_syllables`. They share the analyzer configured at startup, so a
//! client sees the same formulas, stop words and size limit as the CLI.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::{Deserialize, Serialize};

use legibilidad_core::config::Config;
use legibilidad_core::{AnalysisError, AnnotatedDocument, FormulaId, SpanishTokenizer, TextAnalyzer};

use crate::commands::syllables::count_words;

/// How `get_info` renders its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InfoFormat {
    /// One human-readable paragraph.
    #[default]
    Text,
    /// A JSON object.
    Json,
}

/// Parameters for the `get_info` tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// `text` (default) or `json`.
    #[serde(default)]
    pub format: InfoFormat,
}

/// Parameters for the `analyze_readability` tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeReadabilityParams {
    /// Spanish text to analyze. Provide this or `document`.
    pub text: Option<String>,
    /// A document already split into sentences and annotated tokens.
    pub document: Option<AnnotatedDocument>,
    /// Formulas to run. Omit for the server's configured set.
    pub formulas: Option<Vec<FormulaId>>,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// Spanish words to count.
    pub words: Vec<String>,
}

#[derive(Serialize)]
struct ServerSummary {
    name: &'static str,
    version: &'static str,
    formulas: Vec<&'static str>,
    max_input_bytes: Option<usize>,
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Every analysis failure traces back to the submitted text or document.
fn analysis_error(err: AnalysisError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

/// MCP server exposing readability analysis.
#[derive(Clone)]
pub struct ReadabilityServer {
    analyzer: Arc<TextAnalyzer>,
    tokenizer: SpanishTokenizer,
    max_input_bytes: Option<usize>,
    tool_router: ToolRouter<Self>,
}

impl Default for ReadabilityServer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[tool_router]
impl ReadabilityServer {
    /// Build the server from the formulas, stop words and input limit in
    /// `config`.
    pub fn from_config(config: &Config) -> Self {
        let tokenizer =
            SpanishTokenizer::new().with_extra_stopwords(config.extra_stopwords.iter().flatten());
        let analyzer =
            TextAnalyzer::with_tokenizer(tokenizer.clone()).with_formulas(&config.formula_ids());
        Self {
            analyzer: Arc::new(analyzer),
            tokenizer,
            max_input_bytes: config.input_limit(),
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn summary(&self) -> ServerSummary {
        ServerSummary {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            formulas: self.analyzer.formula_ids().iter().map(|id| id.as_str()).collect(),
            max_input_bytes: self.max_input_bytes,
        }
    }

    /// Describe the server and its active formulas.
    #[tool(description = "Get the server version, the formulas it runs, and its input size limit")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let summary = self.summary();
        if params.format == InfoFormat::Json {
            return to_json_result(&summary);
        }

        let limit = summary
            .max_input_bytes
            .map_or_else(|| "no input limit".to_string(), |max| format!("{max}-byte input limit"));
        let text = format!(
            "{} v{}: Spanish readability scoring with {} ({limit}).",
            summary.name,
            summary.version,
            summary.formulas.join(", "),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score the readability of Spanish text.
    #[tool(
        description = "Score the readability of Spanish text with five formulas (Flesch reading ease, Flesch-Kincaid, ARI, Gunning Fog, Coleman-Liau). Pass either `text` or a pre-annotated `document`. Returns document metrics and, per formula, a score and a Spanish label."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_readability(
        &self,
        Parameters(params): Parameters<AnalyzeReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(formulas = ?params.formulas, "analyze_readability called");

        let ad_hoc;
        let analyzer = if let Some(ids) = &params.formulas {
            ad_hoc = TextAnalyzer::with_tokenizer(self.tokenizer.clone()).with_formulas(ids);
            &ad_hoc
        } else {
            self.analyzer.as_ref()
        };

        let report = match (params.text, params.document) {
            (Some(text), None) => {
                self.check_size(text.len())?;
                analyzer.analyze(&text)
            }
            (None, Some(document)) => {
                self.check_size(document.tokens().map(|t| t.text.len()).sum())?;
                analyzer.analyze_document(&document)
            }
            _ => {
                return Err(McpError::invalid_params(
                    "provide exactly one of `text` or `document`",
                    None,
                ));
            }
        }
        .map_err(analysis_error)?;

        tracing::info!(
            sentences = report.metrics.sentence_count,
            words = report.metrics.word_count,
            "analyze_readability completed"
        );
        to_json_result(&report)
    }

    /// Count syllables in Spanish words.
    #[tool(description = "Count syllables in Spanish words. Returns one count per word.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", words = params.words.len()))]
    fn count_syllables(
        &self,
        Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.words.iter().map(String::len).sum())?;
        let counts = count_words(&params.words)
            .map_err(|e| McpError::invalid_params(format!("{e:#}"), None))?;
        to_json_result(&counts)
    }
}

#[tool_handler]
impl ServerHandler for ReadabilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Readability scoring for Spanish prose. Call analyze_readability with \
                 `text` (or an annotated `document`) to get five formula scores with \
                 Spanish labels such as \"fácil\" or \"muy difícil\"; call \
                 count_syllables for per-word syllable counts."
                    .to_string(),
            ),
        }
    }
}
