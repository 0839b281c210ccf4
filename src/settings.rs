//! Settings infrastructure for dtlsp.
//!
//! This module provides support for loading and parsing settings.toml files
//! to extend the built-in token catalog with project-specific token files.
//! The compiled-in catalog and property policy need no configuration; a
//! settings file is only ever additive.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::tokens::TokenCatalog;

/// Root settings structure loaded from settings.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Token catalog configuration.
    pub tokens: Option<TokenSettings>,
}

/// Token-specific settings.
#[derive(Debug, Default, Deserialize)]
pub struct TokenSettings {
    /// Paths to additional SCSS variable files to append to the catalog.
    /// Paths are relative to the directory containing settings.toml.
    pub files: Vec<PathBuf>,
}

/// Load settings from a settings.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: failed to parse settings.toml: {}", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover settings.toml by searching up the directory tree, then direct children.
///
/// Search order:
/// 1. Walk up from `start_dir` to filesystem root
/// 2. If not found, check immediate child directories of `start_dir`
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found settings.toml (used for resolving relative paths).
/// If not found, returns `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("settings.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join("settings.toml");
                if candidate.is_file() {
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}

/// Build the token catalog: the embedded tokens plus any files from settings.
///
/// Unreadable token files produce a warning and are skipped; the embedded
/// catalog always remains available.
pub fn build_catalog(settings: &Settings, settings_dir: &Path) -> TokenCatalog {
    let mut catalog = TokenCatalog::load();

    if let Some(token_settings) = &settings.tokens {
        for path in &token_settings.files {
            let full_path = if path.is_absolute() {
                path.clone()
            } else {
                settings_dir.join(path)
            };

            match std::fs::read_to_string(&full_path) {
                Ok(source) => catalog.extend_from_scss(&source),
                Err(e) => {
                    eprintln!(
                        "Warning: failed to read token file '{}': {}",
                        full_path.display(),
                        e
                    );
                }
            }
        }
    }

    catalog
}
