//! Proverb file loading
//!
//! Seed files are TOML with one `[[proverb]]` table per entry:
//!
//! ```toml
//! [[proverb]]
//! phrase = "Aloha kekahi i kekahi"
//! translation = "Love one another"
//! phrase_explanation = "optional"
//! translation_explanation = "optional"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::application::dictionary::Dictionary;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Entry;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ProverbFile {
    #[serde(rename = "proverb")]
    proverbs: Vec<ProverbRecord>,
}

#[derive(Debug, Deserialize)]
struct ProverbRecord {
    phrase: String,
    translation: String,
    #[serde(default)]
    phrase_explanation: String,
    #[serde(default)]
    translation_explanation: String,
}

/// Parse proverb file content into entries, in file order.
///
/// `origin` only labels errors.
pub fn parse_proverbs(content: &str, origin: &Path) -> ApplicationResult<Vec<Entry>> {
    let file: ProverbFile = toml::from_str(content).map_err(|e| invalid(origin, e.to_string()))?;

    file.proverbs
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            if record.phrase.trim().is_empty() {
                return Err(invalid(origin, format!("proverb #{}: empty phrase", i + 1)));
            }
            Ok(Entry::new(record.phrase, record.translation)
                .with_explanations(record.phrase_explanation, record.translation_explanation))
        })
        .collect()
}

/// Read a proverb file and build a dictionary from it.
///
/// Repeated phrases keep their first occurrence.
#[instrument(level = "debug")]
pub fn load_dictionary(path: &Path) -> ApplicationResult<Dictionary> {
    let content = fs::read_to_string(path).with_path_context("read proverb file", path)?;
    let entries = parse_proverbs(&content, path)?;

    let mut dictionary = Dictionary::new();
    for entry in entries {
        let key = entry.key().to_string();
        if !dictionary.insert(entry) {
            warn!(phrase = %key, "duplicate phrase ignored");
        }
    }
    info!(entries = dictionary.len(), path = %path.display(), "dictionary loaded");
    Ok(dictionary)
}

fn invalid(origin: &Path, message: String) -> ApplicationError {
    ApplicationError::InvalidProverb {
        origin: origin.to_path_buf(),
        message,
    }
}
