//! Hover information for design token references.
//!
//! Hovering a `$kui-...` identifier inside the style block shows the token's
//! resolved value and its documentation. Outside the style block, or on
//! anything that is not a known token, there is nothing to show.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::document::DocumentState;
use crate::sfc;
use crate::tokens::{Token, TokenCatalog};

/// Format a token as markdown for hover display.
fn format_token_docs(token: &Token) -> String {
    let mut doc = format!("**{}**\n\n`{}`", token.name, token.value);
    if let Some(description) = &token.doc {
        doc.push_str(&format!("\n\n{}", description));
    }
    doc
}

/// Produce hover contents for the token reference at an LSP position.
pub fn hover_at_position(
    catalog: &TokenCatalog,
    state: &DocumentState,
    position: Position,
) -> Option<Hover> {
    let offset = state.line_index.position_to_offset(position)?;
    if !sfc::in_style_block(&state.source, offset) {
        return None;
    }

    let line_range = state.line_index.line_range(position.line)?;
    let line = &state.source[line_range.clone()];
    let (ref_range, name) = sfc::token_ref_at(line, offset - line_range.start)?;

    let token = catalog.get(name)?;
    let span = line_range.start + ref_range.start..line_range.start + ref_range.end;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format_token_docs(token),
        }),
        range: Some(state.line_index.span_to_range(&span)),
    })
}
