//! Script completion provider
//! Keyword and construct templates for JavaScript and TypeScript. The two
//! languages register separate instances with separate pools.

use crate::completion::{
    CompletionContext, CompletionProvider, ContextKind, Suggestion, SuggestionKind,
};
use crate::language::Language;

const TRIGGERS: &[char] = &['.', '(', ' '];

const COMMON_SNIPPETS: &[(&str, &str, SuggestionKind, &str)] = &[
    (
        "log",
        "console.log($1);$0",
        SuggestionKind::Function,
        "console.log statement",
    ),
    (
        "fn",
        "function $1($2) {\n\t$0\n}",
        SuggestionKind::Keyword,
        "function declaration",
    ),
    (
        "afn",
        "const $1 = ($2) => {\n\t$0\n};",
        SuggestionKind::Keyword,
        "arrow function",
    ),
    (
        "if",
        "if ($1) {\n\t$0\n}",
        SuggestionKind::Keyword,
        "if statement",
    ),
    (
        "ifelse",
        "if ($1) {\n\t$2\n} else {\n\t$0\n}",
        SuggestionKind::Keyword,
        "if / else statement",
    ),
    (
        "for",
        "for (let $1 = 0; $1 < $2; $1++) {\n\t$0\n}",
        SuggestionKind::Keyword,
        "for loop",
    ),
    (
        "forof",
        "for (const $1 of $2) {\n\t$0\n}",
        SuggestionKind::Keyword,
        "for...of loop",
    ),
    (
        "foreach",
        "$1.forEach(($2) => {\n\t$0\n});",
        SuggestionKind::Function,
        "forEach call",
    ),
    (
        "while",
        "while ($1) {\n\t$0\n}",
        SuggestionKind::Keyword,
        "while loop",
    ),
    (
        "switch",
        "switch ($1) {\n\tcase $2:\n\t\t$0\n\t\tbreak;\n\tdefault:\n\t\tbreak;\n}",
        SuggestionKind::Keyword,
        "switch statement",
    ),
    (
        "trycatch",
        "try {\n\t$1\n} catch (err) {\n\t$0\n}",
        SuggestionKind::Keyword,
        "try / catch block",
    ),
    (
        "class",
        "class $1 {\n\tconstructor($2) {\n\t\t$0\n\t}\n}",
        SuggestionKind::Keyword,
        "class declaration",
    ),
    (
        "import",
        "import { $1 } from \"$2\";$0",
        SuggestionKind::Keyword,
        "import statement",
    ),
    (
        "export",
        "export default $0",
        SuggestionKind::Keyword,
        "default export",
    ),
    (
        "fetch",
        "fetch(\"$1\")\n\t.then((res) => res.json())\n\t.then((data) => {\n\t\t$0\n\t});",
        SuggestionKind::Function,
        "fetch request",
    ),
    (
        "timeout",
        "setTimeout(() => {\n\t$0\n}, $1);",
        SuggestionKind::Function,
        "setTimeout call",
    ),
];

const TYPESCRIPT_SNIPPETS: &[(&str, &str, SuggestionKind, &str)] = &[
    (
        "interface",
        "interface $1 {\n\t$0\n}",
        SuggestionKind::Keyword,
        "interface declaration",
    ),
    (
        "type",
        "type $1 = $0;",
        SuggestionKind::Keyword,
        "type alias",
    ),
    (
        "enum",
        "enum $1 {\n\t$0\n}",
        SuggestionKind::Keyword,
        "enum declaration",
    ),
];

pub struct ScriptProvider {
    language: Language,
    pool: Vec<Suggestion>,
}

impl ScriptProvider {
    pub fn javascript() -> Self {
        Self {
            language: Language::JavaScript,
            pool: build_pool(COMMON_SNIPPETS.iter()),
        }
    }

    pub fn typescript() -> Self {
        Self {
            language: Language::TypeScript,
            pool: build_pool(COMMON_SNIPPETS.iter().chain(TYPESCRIPT_SNIPPETS.iter())),
        }
    }
}

fn build_pool<'a>(
    entries: impl Iterator<Item = &'a (&'a str, &'a str, SuggestionKind, &'a str)>,
) -> Vec<Suggestion> {
    entries
        .map(|(label, insert, kind, detail)| Suggestion::new(*label, *insert, *kind, *detail))
        .collect()
}

impl CompletionProvider for ScriptProvider {
    fn language(&self) -> Language {
        self.language
    }

    fn trigger_characters(&self) -> &[char] {
        TRIGGERS
    }

    fn provide(&self, ctx: &CompletionContext) -> Vec<Suggestion> {
        match &ctx.kind {
            // Scripts have no document macro and no markup contexts
            ContextKind::EmptyTrigger
            | ContextKind::InsideTag
            | ContextKind::InsideAttributeValue { .. } => Vec::new(),
            ContextKind::TagStart | ContextKind::FreeText => {
                if ctx.word.is_empty() {
                    Vec::new()
                } else {
                    self.pool.clone()
                }
            }
        }
    }
}
