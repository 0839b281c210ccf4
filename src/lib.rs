//! Design token language server implementation.

use std::sync::OnceLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};

mod document;
mod lsp;
pub mod policy;
pub mod sfc;
pub(crate) mod settings;
pub mod tokens;

pub use document::{DocumentState, DocumentStore, LineIndex};
pub use lsp::{completion_at_position, completion_for, hover_at_position};
pub use settings::{build_catalog, discover_settings, load_settings, Settings};
pub use tokens::{Token, TokenCatalog, TOKEN_PREFIX};

pub struct Backend {
    client: Client,
    documents: DocumentStore,
    catalog: OnceLock<TokenCatalog>,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            catalog: OnceLock::new(),
        }
    }

    /// Store the latest document text.
    fn on_document_change(&self, uri: Url, text: String, version: i32) {
        self.documents.open(uri, text, version);
    }

    /// The token catalog, falling back to the embedded one if `initialize`
    /// never ran (a client misbehaving should not disable suggestions).
    fn catalog(&self) -> &TokenCatalog {
        self.catalog.get_or_init(TokenCatalog::load)
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        // Extract workspace root from params
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        let catalog = match workspace_root {
            Some(root) => {
                // Discover settings by walking up the directory tree
                let (settings, settings_dir) = settings::discover_settings(&root);
                settings::build_catalog(&settings, &settings_dir)
            }
            None => TokenCatalog::load(),
        };
        let _ = self.catalog.set(catalog);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![
                        " ".to_string(),
                        ":".to_string(),
                        "$".to_string(),
                    ]),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(
                MessageType::INFO,
                format!(
                    "design token language server initialized ({} tokens)",
                    self.catalog().len()
                ),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_document_change(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // We use FULL sync, so there's exactly one change with the full text
        if let Some(change) = params.content_changes.into_iter().next() {
            self.on_document_change(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            );
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close(&params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        Ok(lsp::completion_at_position(self.catalog(), &doc, position))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        Ok(lsp::hover_at_position(self.catalog(), &doc, position))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_can_be_created() {
        let (_service, _socket) = create_service();
    }
}
