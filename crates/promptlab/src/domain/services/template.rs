//! Template content utilities.
//!
//! Placeholder extraction for `{{identifier}}` tokens and the advisory
//! minimum-content check. Neither is applied automatically on create.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum number of characters (after trimming) for meaningful content.
pub const MIN_CONTENT_LENGTH: usize = 10;

/// Regex pattern matching `{{identifier}}` placeholders.
///
/// Identifiers are word characters only, so `{{bad-name}}` and
/// `{{two words}}` never match. Extra outer braces are skipped because the
/// match simply starts at the innermost `{{`.
pub const PLACEHOLDER_PATTERN: &str = r"\{\{(\w+)\}\}";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// True iff the trimmed content has at least [`MIN_CONTENT_LENGTH`] characters.
pub fn validate_prompt_content(text: &str) -> bool {
    text.trim().chars().count() >= MIN_CONTENT_LENGTH
}

// ---------------------------------------------------------------------------
// Placeholder extraction
// ---------------------------------------------------------------------------

/// Extract placeholder names in order of appearance, duplicates included.
pub fn extract_variables(text: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
