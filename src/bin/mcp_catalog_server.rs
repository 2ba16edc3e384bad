//! Pokemon Catalog MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp)
//! that exposes the catalog browsing engine for LLM interaction.

use std::path::Path;
use std::sync::Arc;

use pokemon_catalog::display::{format_catalog_listing, format_detail_state};
use pokemon_catalog::{BrowseSession, DetailView, FixtureSource};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct PokemonCatalogService {
    tool_router: ToolRouter<PokemonCatalogService>,
    session: Arc<Mutex<BrowseSession<FixtureSource>>>,
    detail: Arc<Mutex<DetailView<FixtureSource>>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchCatalogRequest {
    #[schemars(description = "Name substring to match, case-insensitively; empty matches all")]
    pub term: String,
    #[schemars(description = "Type tags every match must carry (ANDed), e.g. [\"Fire\"]")]
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Name of the Pokemon to look up")]
    pub name: String,
}

#[tool_router]
impl PokemonCatalogService {
    pub fn new(source: FixtureSource) -> Self {
        Self {
            tool_router: Self::tool_router(),
            session: Arc::new(Mutex::new(BrowseSession::new(source.clone()))),
            detail: Arc::new(Mutex::new(DetailView::new(source))),
        }
    }

    #[tool(description = "Show the catalog entries currently loaded, after filters")]
    async fn browse_catalog(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let snapshot = session.snapshot();
        let mut text = format!(
            "{} entries loaded{}\n",
            snapshot.entries.len(),
            if snapshot.exhausted {
                " (catalog exhausted)"
            } else {
                ""
            }
        );
        text.push_str(&format_catalog_listing(&session.visible_entries()));
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Load the next catalog page, as scrolling to the end of the list would")]
    async fn load_more(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let text = match session.on_sentinel_visible().await {
            Ok(()) => {
                let snapshot = session.snapshot();
                format!(
                    "Catalog now holds {} entries{}",
                    snapshot.entries.len(),
                    if snapshot.exhausted {
                        "; no more entries to load"
                    } else {
                        ""
                    }
                )
            }
            Err(e) => format!("Error loading catalog page: {}", e),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Filter the loaded catalog by name substring and type tags")]
    async fn search_catalog(
        &self,
        Parameters(request): Parameters<SearchCatalogRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        session.set_query_term(request.term);
        session.clear_types();
        for tag in request.types {
            session.select_type(tag);
        }
        let text = format_catalog_listing(&session.visible_entries());
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up one Pokemon by name: detail card plus evolution chain")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut view = self.detail.lock().await;
        let state = view.lookup(&request.name).await;
        Ok(CallToolResult::success(vec![Content::text(
            format_detail_state(state),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for PokemonCatalogService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Pokemon Catalog MCP Server starting...");

    let source = FixtureSource::load(Path::new("data"))?;
    let service = PokemonCatalogService::new(source);
    let transport = (stdin(), stdout());

    eprintln!("Starting MCP server with transport...");
    let server = service.serve(transport).await?;

    eprintln!("Server running, waiting for shutdown...");
    let quit_reason = server.waiting().await?;

    eprintln!("Pokemon Catalog MCP Server exiting: {:?}", quit_reason);
    Ok(())
}
