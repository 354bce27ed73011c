//! Completion engine
//! Per-language providers classify the cursor's lexical context from raw
//! line text and emit ranked, templated suggestions. Runs on every
//! keystroke, so each request is O(current line length).

use crate::language::Language;
use std::collections::HashMap;

mod context;
pub mod providers;

pub use context::{classify, CompletionContext, ContextKind};

/// What a suggestion inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Multi-line template macro (Emmet-style)
    Snippet,
    /// Markup element expanding to a balanced open/close pair
    Element,
    /// Attribute name inserting `name="$1"`
    Attribute,
    /// Literal value from a closed set
    Value,
    /// Style property
    Property,
    /// Language keyword
    Keyword,
    /// Function-call template
    Function,
}

/// Columns of the token being replaced by an accepted suggestion.
/// Always spans the current word/trigger token, never adjacent text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceRange {
    pub start_column: usize,
    pub end_column: usize,
    pub line: usize,
}

/// A single ranked completion item. `insert_text` may contain ordered
/// tab-stop placeholders (`$1`, `$2`, ..., `$0` for the final cursor
/// position) which the host widget steps through after acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub insert_text: String,
    pub kind: SuggestionKind,
    pub detail: String,
    pub sort_text: String,
    pub filter_text: String,
    pub preselect: bool,
    pub range: ReplaceRange,
}

impl Suggestion {
    pub fn new(
        label: impl Into<String>,
        insert_text: impl Into<String>,
        kind: SuggestionKind,
        detail: impl Into<String>,
    ) -> Self {
        let label = label.into();
        Suggestion {
            sort_text: label.clone(),
            filter_text: label.clone(),
            label,
            insert_text: insert_text.into(),
            kind,
            detail: detail.into(),
            preselect: false,
            range: ReplaceRange::default(),
        }
    }

    pub fn with_sort_text(mut self, sort_text: impl Into<String>) -> Self {
        self.sort_text = sort_text.into();
        self
    }

    pub fn with_filter_text(mut self, filter_text: impl Into<String>) -> Self {
        self.filter_text = filter_text.into();
        self
    }

    pub fn preselected(mut self) -> Self {
        self.preselect = true;
        self
    }
}

/// A per-language completion source. The host invokes `provide` on every
/// keystroke matching one of the trigger characters, so implementations
/// must stay cheap and must never fail: an unrecognized context yields an
/// empty list.
pub trait CompletionProvider {
    fn language(&self) -> Language;

    /// Characters whose insertion should invoke this provider
    fn trigger_characters(&self) -> &[char];

    fn provide(&self, ctx: &CompletionContext) -> Vec<Suggestion>;
}

/// Registry mapping each language to its provider.
/// Providers never share suggestion pools across languages.
pub struct ProviderRegistry {
    providers: HashMap<Language, Box<dyn CompletionProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registry with the built-in markup, style and script providers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(providers::html::HtmlProvider::new()));
        registry.register(Box::new(providers::css::CssProvider::new()));
        registry.register(Box::new(providers::script::ScriptProvider::javascript()));
        registry.register(Box::new(providers::script::ScriptProvider::typescript()));
        registry
    }

    pub fn register(&mut self, provider: Box<dyn CompletionProvider>) {
        self.providers.insert(provider.language(), provider);
    }

    pub fn provider_for(&self, language: Language) -> Option<&dyn CompletionProvider> {
        self.providers.get(&language).map(|p| p.as_ref())
    }

    /// Whether `ch` triggers completion for the given language
    pub fn is_trigger(&self, language: Language, ch: char) -> bool {
        self.provider_for(language)
            .map(|p| p.trigger_characters().contains(&ch))
            .unwrap_or(false)
    }

    /// Produce the ranked, deduplicated, narrowed suggestion list for one
    /// request. Languages without a provider get an empty list.
    pub fn complete(
        &self,
        language: Language,
        line_text: &str,
        cursor_column: usize,
        line_number: usize,
    ) -> Vec<Suggestion> {
        let provider = match self.provider_for(language) {
            Some(p) => p,
            None => return Vec::new(),
        };

        let ctx = classify(line_text, cursor_column);
        let mut suggestions = provider.provide(&ctx);

        // Rank by sort_text, stable so provider order breaks ties
        suggestions.sort_by(|a, b| a.sort_text.cmp(&b.sort_text));

        // Deduplicate by label, keeping the best-ranked occurrence
        let mut seen = Vec::new();
        suggestions.retain(|s| {
            if seen.contains(&s.label) {
                false
            } else {
                seen.push(s.label.clone());
                true
            }
        });

        // Narrow to the typed prefix, preserving relative order. The
        // trigger sigil itself is not a filter.
        if !ctx.word.is_empty() && ctx.kind != ContextKind::EmptyTrigger {
            let needle = ctx.word.to_lowercase();
            suggestions.retain(|s| {
                s.filter_text.to_lowercase().contains(&needle)
                    || s.label.to_lowercase().contains(&needle)
            });
        }

        let range = ReplaceRange {
            start_column: ctx.word_start,
            end_column: ctx.cursor_column,
            line: line_number,
        };
        for suggestion in &mut suggestions {
            suggestion.range = range;
        }
        suggestions
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
