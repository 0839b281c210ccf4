//! Completion support for design tokens in component style blocks.
//!
//! Produces token suggestions restricted to the families that are valid for
//! the CSS property being authored. The whole pipeline is pure: catalog and
//! policy in, suggestion list out, with every failure path collapsing to an
//! empty list rather than an error.

use std::collections::HashSet;

use tower_lsp::lsp_types::*;

use crate::document::DocumentState;
use crate::policy;
use crate::sfc;
use crate::tokens::{Token, TokenCatalog, TOKEN_PREFIX};

/// Collect catalog entries matching any of the allowed prefixes.
///
/// Each prefix is qualified with the catalog's naming convention
/// (`$kui-<prefix>`) before matching. A token qualifying under more than one
/// prefix appears once, at the position of its first match.
fn tokens_for_prefixes<'a>(catalog: &'a TokenCatalog, prefixes: &[&str]) -> Vec<&'a Token> {
    let mut seen = HashSet::new();
    let mut matched = Vec::new();

    for prefix in prefixes {
        let qualified = format!("{}-{}", TOKEN_PREFIX, prefix);
        for token in catalog.matching_prefix(&qualified) {
            if seen.insert(token.name.as_str()) {
                matched.push(token);
            }
        }
    }

    matched
}

/// Build a completion item for a matched token.
///
/// The token name is both the display label and the inserted text; the value
/// shows as supplementary detail and is never inserted.
fn to_completion_item(token: &Token) -> CompletionItem {
    CompletionItem {
        label: token.name.clone(),
        kind: Some(CompletionItemKind::VALUE),
        detail: Some(token.value.clone()),
        documentation: token.doc.as_ref().map(|doc| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: doc.clone(),
            })
        }),
        insert_text: Some(token.name.clone()),
        ..Default::default()
    }
}

/// Generate token suggestions for a cursor position in a component file.
///
/// `offset` is the cursor's byte offset in `text`; `line` is the text of the
/// line containing the cursor. Suggestions are produced only when the cursor
/// sits inside the first style block and the current line declares a CSS
/// property with a non-empty policy entry.
pub fn completion_for(
    catalog: &TokenCatalog,
    text: &str,
    offset: usize,
    line: &str,
) -> Vec<CompletionItem> {
    if !sfc::in_style_block(text, offset) {
        return Vec::new();
    }

    let Some(property) = sfc::css_property(line) else {
        return Vec::new();
    };

    let prefixes = policy::allowed_prefixes(property);
    if prefixes.is_empty() {
        return Vec::new();
    }

    tokens_for_prefixes(catalog, prefixes)
        .into_iter()
        .map(to_completion_item)
        .collect()
}

/// Generate completions at an LSP position in a component document.
pub fn completion_at_position(
    catalog: &TokenCatalog,
    state: &DocumentState,
    position: Position,
) -> Option<CompletionResponse> {
    let offset = state.line_index.position_to_offset(position)?;
    let line = state.line_index.line_text(position.line)?;

    let items = completion_for(catalog, &state.source, offset, line);
    if items.is_empty() {
        None
    } else {
        Some(CompletionResponse::Array(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TokenCatalog {
        TokenCatalog::from_scss(
            "/* Default background color for containers (white). */\n\
             $kui-color-background: #ffffff;\n\
             $kui-color-background-danger: #d60027;\n\
             $kui-border-width-10: 1px;\n\
             $kui-status-color-200: #b5ffee;\n\
             $kui-space-40: 8px;\n",
        )
    }

    /// Component file with a single declaration line inside the style block.
    /// Returns the source, the cursor offset at the end of that line, and the
    /// line text.
    fn sfc_with_declaration(declaration: &str) -> (String, usize, String) {
        let source = format!(
            "<template>\n  <div />\n</template>\n\n<style scoped>\n.card {{\n  {declaration}\n}}\n</style>\n"
        );
        let line = format!("  {declaration}");
        let offset = source.find(declaration).unwrap() + declaration.len();
        (source, offset, line)
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn background_color_gets_background_and_status_tokens() {
        let (source, offset, line) = sfc_with_declaration("background-color: ");
        let items = completion_for(&catalog(), &source, offset, &line);
        let names = labels(&items);

        assert!(names.contains(&"$kui-color-background"), "{:?}", names);
        assert!(names.contains(&"$kui-color-background-danger"), "{:?}", names);
        assert!(names.contains(&"$kui-status-color-200"), "{:?}", names);
        assert!(!names.contains(&"$kui-border-width-10"), "{:?}", names);
    }

    #[test]
    fn suggestions_respect_policy_prefixes() {
        let (source, offset, line) = sfc_with_declaration("padding: ");
        let items = completion_for(&catalog(), &source, offset, &line);
        assert_eq!(labels(&items), vec!["$kui-space-40"]);
    }

    #[test]
    fn suppressed_property_yields_nothing() {
        let (source, offset, line) = sfc_with_declaration("bottom: ");
        assert!(completion_for(&catalog(), &source, offset, &line).is_empty());
    }

    #[test]
    fn unknown_property_yields_nothing() {
        let (source, offset, line) = sfc_with_declaration("transform: ");
        assert!(completion_for(&catalog(), &source, offset, &line).is_empty());
    }

    #[test]
    fn no_property_on_line_yields_nothing() {
        let (source, offset, _) = sfc_with_declaration("background-color: ");
        assert!(completion_for(&catalog(), &source, offset, ".card {").is_empty());
    }

    #[test]
    fn cursor_outside_style_block_yields_nothing() {
        let (source, _, line) = sfc_with_declaration("background-color: ");
        // Template region, before the style block
        assert!(completion_for(&catalog(), &source, 0, &line).is_empty());
        assert!(completion_for(&catalog(), &source, 5, &line).is_empty());
    }

    #[test]
    fn document_without_style_block_yields_nothing() {
        let source = "  background-color: ";
        assert!(completion_for(&catalog(), source, 10, source).is_empty());
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let (source, offset, line) = sfc_with_declaration("background-color: ");
        let empty = TokenCatalog::default();
        assert!(completion_for(&empty, &source, offset, &line).is_empty());
    }

    #[test]
    fn token_matching_two_prefixes_appears_once() {
        let catalog = TokenCatalog::from_scss("$kui-color-background: #ffffff;\n");
        // Overlapping prefixes both qualify the same token
        let matched = tokens_for_prefixes(&catalog, &["color", "color-background"]);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "$kui-color-background");
    }

    #[test]
    fn resolver_is_idempotent() {
        let (source, offset, line) = sfc_with_declaration("background-color: ");
        let catalog = catalog();
        let first = completion_for(&catalog, &source, offset, &line);
        let second = completion_for(&catalog, &source, offset, &line);
        assert_eq!(labels(&first), labels(&second));
    }

    #[test]
    fn items_carry_value_as_detail_and_name_as_insert_text() {
        let (source, offset, line) = sfc_with_declaration("background-color: ");
        let items = completion_for(&catalog(), &source, offset, &line);
        let item = items
            .iter()
            .find(|i| i.label == "$kui-color-background")
            .unwrap();

        assert_eq!(item.kind, Some(CompletionItemKind::VALUE));
        assert_eq!(item.detail.as_deref(), Some("#ffffff"));
        assert_eq!(item.insert_text.as_deref(), Some("$kui-color-background"));
        assert!(item.documentation.is_some());
    }

    #[test]
    fn completion_at_position_maps_cursor_and_line() {
        let (source, _, _) = sfc_with_declaration("background-color: ");
        let state = DocumentState::new(source, 0);
        // Line 6 is `  background-color: `, cursor at the end of it
        let position = Position::new(6, 20);

        let response = completion_at_position(&catalog(), &state, position);
        let Some(CompletionResponse::Array(items)) = response else {
            panic!("expected completion items");
        };
        assert!(labels(&items).contains(&"$kui-color-background"));
    }

    #[test]
    fn completion_at_position_empty_is_none() {
        let (source, _, _) = sfc_with_declaration("bottom: ");
        let state = DocumentState::new(source, 0);
        assert!(completion_at_position(&catalog(), &state, Position::new(6, 10)).is_none());
    }
}
