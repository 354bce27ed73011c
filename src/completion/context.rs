//! Lexical context classification
//! A single left-to-right scan of the current line up to the cursor,
//! independent of the host widget so it stays testable in isolation.

use crate::constants::ui::TRIGGER_SIGIL;

/// Where the cursor sits, lexically
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKind {
    /// The trimmed line is exactly the trigger sigil
    EmptyTrigger,
    /// Typing an element name (after `<` or a bare word)
    TagStart,
    /// Inside an unterminated tag, before any attribute assignment
    InsideTag,
    /// Inside a quoted attribute value; carries the attribute name
    InsideAttributeValue { attribute: String },
    /// Anything else; providers fall back to word matching
    FreeText,
}

/// Derived per completion request, never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    pub line_text: String,
    /// Cursor column as a character offset into the line
    pub cursor_column: usize,
    pub kind: ContextKind,
    /// The partial token being replaced (empty when none)
    pub word: String,
    /// Character column where `word` starts
    pub word_start: usize,
}

/// Classify the cursor context from raw line text.
/// Never fails: untokenizable input degrades to `FreeText`.
pub fn classify(line_text: &str, cursor_column: usize) -> CompletionContext {
    let chars: Vec<char> = line_text.chars().collect();
    let cursor = cursor_column.min(chars.len());

    // The whole-line trigger sigil expands full-document templates
    if line_text.trim() == TRIGGER_SIGIL.to_string() {
        let sigil_at = chars.iter().position(|&c| c == TRIGGER_SIGIL).unwrap_or(0);
        return CompletionContext {
            line_text: line_text.to_string(),
            cursor_column: cursor,
            kind: ContextKind::EmptyTrigger,
            word: TRIGGER_SIGIL.to_string(),
            word_start: sigil_at,
        };
    }

    let scan = scan_prefix(&chars[..cursor]);

    let (kind, word, word_start) = match scan {
        Scan {
            tag_open: Some(tag_state),
            ..
        } => match tag_state {
            TagScan::Name { start } => {
                let word: String = chars[start..cursor].iter().collect();
                (ContextKind::TagStart, word, start)
            }
            TagScan::Attributes { ident_start } => {
                let start = ident_start.unwrap_or(cursor);
                let word: String = chars[start..cursor].iter().collect();
                (ContextKind::InsideTag, word, start)
            }
            TagScan::Value {
                attribute,
                value_start,
            } => {
                let word: String = chars[value_start..cursor].iter().collect();
                (
                    ContextKind::InsideAttributeValue { attribute },
                    word,
                    value_start,
                )
            }
            // An open quote with no attribute assignment cannot be
            // tokenized on this line alone; degrade to free words
            TagScan::Unbalanced => free_word(&chars, cursor),
        },
        _ => {
            let (kind, word, start) = free_word(&chars, cursor);
            let trimmed = line_text.trim_start();
            if trimmed.starts_with('<') || !word.is_empty() {
                (ContextKind::TagStart, word, start)
            } else {
                (kind, word, start)
            }
        }
    };

    CompletionContext {
        line_text: line_text.to_string(),
        cursor_column: cursor,
        kind,
        word,
        word_start,
    }
}

fn free_word(chars: &[char], cursor: usize) -> (ContextKind, String, usize) {
    let mut start = cursor;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let word: String = chars[start..cursor].iter().collect();
    (ContextKind::FreeText, word, start)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// State of the innermost unterminated tag at the cursor
enum TagScan {
    /// Still typing the element name; `start` is the column after `<`
    Name { start: usize },
    /// Past the name, typing attribute names
    Attributes { ident_start: Option<usize> },
    /// Inside a quoted value of the named attribute
    Value { attribute: String, value_start: usize },
    /// Open quote with no assignment; cannot classify
    Unbalanced,
}

struct Scan {
    tag_open: Option<TagScan>,
}

/// One pass over the prefix, tracking tag/quote/assignment state
fn scan_prefix(prefix: &[char]) -> Scan {
    let mut tag_open_at: Option<usize> = None;
    let mut in_quote: Option<char> = None;
    let mut value_attr: Option<String> = None;
    let mut value_start = 0usize;
    let mut ident_start: Option<usize> = None;
    let mut current_ident = String::new();
    let mut seen_space_in_tag = false;

    for (i, &c) in prefix.iter().enumerate() {
        if let Some(quote) = in_quote {
            if c == quote {
                in_quote = None;
                value_attr = None;
                current_ident.clear();
                ident_start = None;
            }
            continue;
        }

        match c {
            '<' => {
                tag_open_at = Some(i);
                seen_space_in_tag = false;
                current_ident.clear();
                ident_start = None;
                value_attr = None;
            }
            '>' => {
                tag_open_at = None;
                seen_space_in_tag = false;
                current_ident.clear();
                ident_start = None;
                value_attr = None;
            }
            '"' | '\'' if tag_open_at.is_some() => {
                in_quote = Some(c);
                value_start = i + 1;
            }
            '=' if tag_open_at.is_some() => {
                if !current_ident.is_empty() {
                    value_attr = Some(current_ident.clone());
                }
                current_ident.clear();
                ident_start = None;
            }
            c if c.is_whitespace() => {
                if tag_open_at.is_some() {
                    seen_space_in_tag = true;
                }
                current_ident.clear();
                ident_start = None;
            }
            c if is_word_char(c) => {
                if current_ident.is_empty() {
                    ident_start = Some(i);
                }
                current_ident.push(c);
            }
            _ => {
                current_ident.clear();
                ident_start = None;
            }
        }
    }

    let tag_open = match tag_open_at {
        None => None,
        Some(open_at) => Some(if let Some(attribute) = value_attr {
            if in_quote.is_some() {
                TagScan::Value {
                    attribute,
                    value_start,
                }
            } else {
                // `name=` typed but the quote not yet opened; treat as
                // still inside the tag
                TagScan::Attributes { ident_start }
            }
        } else if in_quote.is_some() {
            TagScan::Unbalanced
        } else if seen_space_in_tag {
            TagScan::Attributes { ident_start }
        } else {
            TagScan::Name { start: open_at + 1 }
        }),
    };

    Scan { tag_open }
}
