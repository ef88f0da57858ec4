//! Rendering state shared across a single document.

use std::collections::HashMap;

/// Generates unique heading anchors within one document.
#[derive(Debug, Default)]
pub(crate) struct HeadingIds {
    /// How many times each base slug has been handed out.
    counts: HashMap<String, usize>,
}

impl HeadingIds {
    /// Mark an explicit `{#id}` as taken so generated IDs don't collide with it.
    pub(crate) fn reserve(&mut self, id: &str) {
        self.counts.entry(id.to_owned()).or_insert(1);
    }

    /// Generate a unique ID for heading text.
    ///
    /// The first occurrence gets the bare slug, later ones `-1`, `-2`, ...
    pub(crate) fn generate(&mut self, text: &str) -> String {
        let mut base_id = slugify(text);
        if base_id.is_empty() {
            base_id.push_str("section");
        }
        loop {
            let count = self.counts.entry(base_id.clone()).or_default();
            let id = match *count {
                0 => base_id.clone(),
                n => format!("{base_id}-{n}"),
            };
            *count += 1;
            // A suffixed ID may itself have been reserved explicitly.
            if id == base_id || !self.counts.contains_key(&id) {
                self.counts.entry(id.clone()).or_insert(1);
                return id;
            }
        }
    }
}

/// Convert text to an anchor slug.
///
/// Keeps Unicode letters and digits in lowercase, replaces whitespace/dashes/underscores
/// with single dashes, and removes everything else.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
