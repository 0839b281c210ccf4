//! Property-token policy: which token families are valid for a CSS property.
//!
//! Each CSS property maps to the set of token-name fragments (without the
//! `$kui-` prefix) that may be suggested for it. An empty set means no token
//! should ever be used for that property; a property absent from the table is
//! simply unknown and gets no suggestions either.

use std::collections::HashMap;
use std::sync::LazyLock;

/// CSS property -> allowed token-name prefixes, lazily initialized.
static PROPERTY_PREFIXES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        HashMap::from([
            ("background", &["color-background", "status-color"][..]),
            ("background-color", &["color-background", "status-color"][..]),
            ("background-size", &[][..]),
            ("border", &["border-radius", "border-width", "color-border"][..]),
            ("border-bottom", &["border-radius", "border-width", "color-border"][..]),
            ("border-bottom-color", &["color-border"][..]),
            ("border-bottom-left-radius", &["border-radius"][..]),
            ("border-bottom-right-radius", &["border-radius"][..]),
            ("border-bottom-width", &["border-width"][..]),
            ("border-color", &["color-border"][..]),
            ("border-left", &["border-radius", "border-width", "color-border"][..]),
            ("border-left-color", &["color-border"][..]),
            ("border-left-width", &["border-width"][..]),
            ("border-radius", &["border-radius"][..]),
            ("border-right", &["border-radius", "border-width", "color-border"][..]),
            ("border-right-color", &["color-border"][..]),
            ("border-right-width", &["border-width"][..]),
            ("border-spacing", &["space"][..]),
            ("border-top", &["border-radius", "border-width", "color-border"][..]),
            ("border-top-color", &["color-border"][..]),
            ("border-top-left-radius", &["border-radius"][..]),
            ("border-top-right-radius", &["border-radius"][..]),
            ("border-top-width", &["border-width"][..]),
            ("border-width", &["border-width"][..]),
            ("bottom", &[][..]),
            ("box-shadow", &["border-width", "color-border", "shadow"][..]),
            ("color", &["color-text", "icon-color", "status-color"][..]),
            ("column-gap", &["space"][..]),
            ("column-width", &[][..]),
            ("fill", &["color-text", "status-color"][..]),
            ("font", &["font-family", "font-size", "font-weight"][..]),
            ("font-family", &["font-family"][..]),
            ("font-size", &["font-size"][..]),
            ("font-weight", &["font-weight"][..]),
            ("gap", &["space"][..]),
            ("height", &["icon-size"][..]),
            ("inset", &[][..]),
            ("left", &[][..]),
            ("letter-spacing", &["letter-spacing"][..]),
            ("line-height", &["line-height"][..]),
            ("margin", &["space"][..]),
            ("margin-bottom", &["space"][..]),
            ("margin-left", &["space"][..]),
            ("margin-right", &["space"][..]),
            ("margin-top", &["space"][..]),
            ("max-height", &["icon-size"][..]),
            ("max-width", &["icon-size", "breakpoint"][..]),
            ("min-height", &["icon-size"][..]),
            ("min-width", &["icon-size", "breakpoint"][..]),
            ("outline", &[][..]),
            ("outline-color", &[][..]),
            ("outline-width", &[][..]),
            ("padding", &["space"][..]),
            ("padding-bottom", &["space"][..]),
            ("padding-left", &["space"][..]),
            ("padding-right", &["space"][..]),
            ("padding-top", &["space"][..]),
            ("right", &[][..]),
            ("row-gap", &["space"][..]),
            ("stroke", &["color-text", "status-color"][..]),
            ("text-decoration-color", &["color-text"][..]),
            ("top", &[][..]),
            ("width", &["icon-size", "breakpoint"][..]),
        ])
    });

/// Allowed token-name prefixes for a CSS property.
///
/// The property name is matched exactly and case-sensitively; no
/// normalization happens here. Unknown properties and properties with an
/// explicitly empty entry both yield the empty slice.
pub fn allowed_prefixes(css_property: &str) -> &'static [&'static str] {
    PROPERTY_PREFIXES
        .get(css_property)
        .copied()
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_property() {
        assert_eq!(
            allowed_prefixes("background-color"),
            &["color-background", "status-color"]
        );
    }

    #[test]
    fn explicitly_suppressed_property() {
        assert!(allowed_prefixes("bottom").is_empty());
        assert!(allowed_prefixes("outline-color").is_empty());
    }

    #[test]
    fn unknown_property() {
        assert!(allowed_prefixes("transform").is_empty());
        assert!(allowed_prefixes("").is_empty());
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(allowed_prefixes("Background-Color").is_empty());
    }
}
