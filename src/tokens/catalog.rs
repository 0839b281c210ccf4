//! Design token catalog loaded from SCSS variable definitions.

use std::sync::LazyLock;

use regex::Regex;

/// Sigil + namespace every token name starts with.
pub const TOKEN_PREFIX: &str = "$kui";

/// SCSS variable definitions for the design system tokens, bundled at
/// compile time. This is the fixed data source the catalog is built from.
const EMBEDDED_TOKENS: &str = include_str!("kui.scss");

/// A named design constant with a fixed CSS-legal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Full token name including the `$kui-` prefix.
    pub name: String,
    /// The resolved value (a color, length, font stack, etc.).
    pub value: String,
    /// Documentation from the comment preceding the definition, if any.
    pub doc: Option<String>,
}

/// Pattern for a token definition line: `$name: value;`.
static TOKEN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\$[a-zA-Z][a-zA-Z0-9-]*)\s*:\s*([^;]+?)\s*;?\s*$").unwrap());

/// Read-only dictionary of all known design tokens.
///
/// Built once at server initialization and passed by reference wherever
/// suggestions are produced; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    tokens: Vec<Token>,
}

impl TokenCatalog {
    /// Load the catalog from the embedded token definitions.
    ///
    /// Deterministic and side-effect-free. If the embedded data were ever
    /// malformed the affected lines are skipped, degrading toward an empty
    /// catalog rather than failing.
    pub fn load() -> Self {
        Self::from_scss(EMBEDDED_TOKENS)
    }

    /// Parse a catalog from SCSS variable definitions.
    ///
    /// Lines starting with the token prefix are definitions; a `/* ... */`
    /// comment directly above a definition becomes its documentation. Lines
    /// that match neither shape are ignored.
    pub fn from_scss(source: &str) -> Self {
        let mut catalog = Self::default();
        catalog.extend_from_scss(source);
        catalog
    }

    /// Append token definitions parsed from SCSS source.
    ///
    /// Definitions whose name is already present are skipped, keeping token
    /// names unique across the embedded data and any configured extras.
    pub fn extend_from_scss(&mut self, source: &str) {
        let mut pending_doc: Option<String> = None;

        for line in source.lines() {
            let line = line.trim();

            if line.starts_with("/*") && line.ends_with("*/") {
                let inner = line[2..line.len() - 2].trim();
                pending_doc = (!inner.is_empty()).then(|| inner.to_string());
                continue;
            }

            if !line.starts_with(TOKEN_PREFIX) {
                pending_doc = None;
                continue;
            }

            if let Some(caps) = TOKEN_LINE.captures(line) {
                let name = caps[1].to_string();
                if self.get(&name).is_none() {
                    self.tokens.push(Token {
                        name,
                        value: caps[2].to_string(),
                        doc: pending_doc.take(),
                    });
                }
            }
            pending_doc = None;
        }
    }

    /// Look up a token by its exact name.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.name == name)
    }

    /// All tokens whose name starts with `prefix`, compared case-insensitively.
    ///
    /// Definition order is preserved.
    pub fn matching_prefix<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a Token> {
        let prefix = prefix.to_lowercase();
        self.tokens
            .iter()
            .filter(move |t| t.name.to_lowercase().starts_with(&prefix))
    }

    /// Iterate over all tokens in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Number of tokens in the catalog.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the catalog holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
