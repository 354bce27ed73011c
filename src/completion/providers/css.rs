//! Style completion provider
//! Property snippets in declaration position, enumerated keyword values
//! after a `:` within the current declaration.

use crate::completion::{
    CompletionContext, CompletionProvider, ContextKind, Suggestion, SuggestionKind,
};
use crate::language::Language;

const TRIGGERS: &[char] = &[':', ' ', '-'];

const PROPERTIES: &[&str] = &[
    "display",
    "position",
    "color",
    "background-color",
    "background",
    "margin",
    "padding",
    "border",
    "border-radius",
    "width",
    "height",
    "max-width",
    "min-height",
    "font-size",
    "font-weight",
    "font-family",
    "text-align",
    "line-height",
    "flex",
    "flex-direction",
    "justify-content",
    "align-items",
    "gap",
    "grid-template-columns",
    "overflow",
    "z-index",
    "opacity",
    "cursor",
    "transition",
    "box-shadow",
];

/// Keyword values for properties with a closed value set
const PROPERTY_VALUES: &[(&str, &[&str])] = &[
    (
        "display",
        &["block", "inline", "inline-block", "flex", "grid", "none"],
    ),
    (
        "position",
        &["static", "relative", "absolute", "fixed", "sticky"],
    ),
    (
        "justify-content",
        &[
            "flex-start",
            "flex-end",
            "center",
            "space-between",
            "space-around",
            "space-evenly",
        ],
    ),
    (
        "align-items",
        &["stretch", "flex-start", "flex-end", "center", "baseline"],
    ),
    ("flex-direction", &["row", "row-reverse", "column", "column-reverse"]),
    ("text-align", &["left", "right", "center", "justify"]),
    ("overflow", &["visible", "hidden", "scroll", "auto"]),
    ("font-weight", &["normal", "bold", "lighter", "bolder"]),
    (
        "cursor",
        &["pointer", "default", "text", "move", "grab", "not-allowed"],
    ),
];

pub struct CssProvider;

impl CssProvider {
    pub fn new() -> Self {
        Self
    }

    fn properties(&self) -> Vec<Suggestion> {
        PROPERTIES
            .iter()
            .map(|name| {
                Suggestion::new(
                    *name,
                    format!("{}: $1;", name),
                    SuggestionKind::Property,
                    "property",
                )
            })
            .collect()
    }

    fn values_for(&self, property: &str) -> Vec<Suggestion> {
        PROPERTY_VALUES
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, values)| {
                values
                    .iter()
                    .map(|v| {
                        Suggestion::new(*v, *v, SuggestionKind::Value, format!("{} value", property))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The property of the declaration the cursor sits in, when the prefix
    /// of the line contains an unterminated `property:` assignment
    fn declaration_property(ctx: &CompletionContext) -> Option<String> {
        let prefix: String = ctx.line_text.chars().take(ctx.cursor_column).collect();
        let after_semicolon = prefix.rsplit(';').next().unwrap_or(&prefix);
        let (property, _) = after_semicolon.split_once(':')?;
        Some(property.trim().trim_start_matches(['.', '#', '{']).trim().to_string())
    }
}

impl CompletionProvider for CssProvider {
    fn language(&self) -> Language {
        Language::Css
    }

    fn trigger_characters(&self) -> &[char] {
        TRIGGERS
    }

    fn provide(&self, ctx: &CompletionContext) -> Vec<Suggestion> {
        // CSS has no tags; the classifier's markup kinds are ignored in
        // favor of the declaration shape of the current line
        if let Some(property) = Self::declaration_property(ctx) {
            return self.values_for(&property);
        }
        match &ctx.kind {
            ContextKind::EmptyTrigger => Vec::new(),
            _ if ctx.word.is_empty() => Vec::new(),
            _ => self.properties(),
        }
    }
}

impl Default for CssProvider {
    fn default() -> Self {
        Self::new()
    }
}
