//! Markup completion provider
//! Elements, attribute names, enumerated attribute values, and the
//! full-document Emmet-style template macros.

use crate::completion::{
    CompletionContext, CompletionProvider, ContextKind, Suggestion, SuggestionKind,
};
use crate::language::Language;

const TRIGGERS: &[char] = &['<', '!', ' ', '"', '\''];

/// Container elements expanding to a balanced open/close pair
const ELEMENTS: &[(&str, &str)] = &[
    ("div", "<div>$1</div>"),
    ("span", "<span>$1</span>"),
    ("p", "<p>$1</p>"),
    ("a", "<a href=\"$1\">$2</a>"),
    ("img", "<img src=\"$1\" alt=\"$2\">"),
    ("ul", "<ul>\n\t<li>$1</li>\n</ul>"),
    ("ol", "<ol>\n\t<li>$1</li>\n</ol>"),
    ("li", "<li>$1</li>"),
    ("h1", "<h1>$1</h1>"),
    ("h2", "<h2>$1</h2>"),
    ("h3", "<h3>$1</h3>"),
    ("button", "<button type=\"$1\">$2</button>"),
    ("input", "<input type=\"$1\">"),
    ("form", "<form action=\"$1\" method=\"$2\">\n\t$3\n</form>"),
    ("label", "<label for=\"$1\">$2</label>"),
    ("select", "<select name=\"$1\">\n\t<option value=\"$2\">$3</option>\n</select>"),
    ("table", "<table>\n\t<tr>\n\t\t<td>$1</td>\n\t</tr>\n</table>"),
    ("header", "<header>$1</header>"),
    ("footer", "<footer>$1</footer>"),
    ("nav", "<nav>$1</nav>"),
    ("section", "<section>$1</section>"),
    ("article", "<article>$1</article>"),
    ("main", "<main>$1</main>"),
    ("script", "<script src=\"$1\"></script>"),
    ("link", "<link rel=\"stylesheet\" href=\"$1\">"),
];

/// Common attribute names, all inserting `name="$1"`
const ATTRIBUTES: &[&str] = &[
    "class",
    "id",
    "style",
    "src",
    "href",
    "alt",
    "title",
    "type",
    "value",
    "name",
    "placeholder",
    "target",
    "rel",
    "method",
    "action",
    "for",
    "disabled",
    "required",
    "onclick",
    "onchange",
];

/// Closed value sets for enumerated attributes
const ATTRIBUTE_VALUES: &[(&str, &[&str])] = &[
    (
        "type",
        &[
            "text", "password", "email", "number", "checkbox", "radio", "submit", "button",
            "file", "date", "hidden",
        ],
    ),
    ("target", &["_blank", "_self", "_parent", "_top"]),
    ("rel", &["stylesheet", "icon", "noopener", "noreferrer"]),
    ("method", &["get", "post"]),
];

/// The html:5 document skeleton expanded by the trigger sigil
const DOCUMENT_TEMPLATE: &str = "<!DOCTYPE html>\n\
<html lang=\"$1\">\n\
<head>\n\
\t<meta charset=\"UTF-8\">\n\
\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
\t<title>$2</title>\n\
</head>\n\
<body>\n\
\t$0\n\
</body>\n\
</html>";

const DOCTYPE_TEMPLATE: &str = "<!DOCTYPE html>\n$0";

pub struct HtmlProvider;

impl HtmlProvider {
    pub fn new() -> Self {
        Self
    }

    fn template_macros(&self) -> Vec<Suggestion> {
        vec![
            Suggestion::new(
                "!",
                DOCUMENT_TEMPLATE,
                SuggestionKind::Snippet,
                "HTML5 document skeleton",
            )
            .with_sort_text("0")
            .with_filter_text("!")
            .preselected(),
            Suggestion::new(
                "!!!",
                DOCTYPE_TEMPLATE,
                SuggestionKind::Snippet,
                "Doctype declaration only",
            )
            .with_sort_text("1")
            .with_filter_text("!!!"),
        ]
    }

    fn elements(&self) -> Vec<Suggestion> {
        ELEMENTS
            .iter()
            .map(|(name, insert)| {
                Suggestion::new(
                    *name,
                    *insert,
                    SuggestionKind::Element,
                    format!("<{}> element", name),
                )
            })
            .collect()
    }

    fn attributes(&self) -> Vec<Suggestion> {
        ATTRIBUTES
            .iter()
            .map(|name| {
                Suggestion::new(
                    *name,
                    format!("{}=\"$1\"", name),
                    SuggestionKind::Attribute,
                    "attribute",
                )
            })
            .collect()
    }

    fn values_for(&self, attribute: &str) -> Vec<Suggestion> {
        ATTRIBUTE_VALUES
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, values)| {
                values
                    .iter()
                    .map(|v| {
                        Suggestion::new(*v, *v, SuggestionKind::Value, format!("{} value", attribute))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl CompletionProvider for HtmlProvider {
    fn language(&self) -> Language {
        Language::Html
    }

    fn trigger_characters(&self) -> &[char] {
        TRIGGERS
    }

    fn provide(&self, ctx: &CompletionContext) -> Vec<Suggestion> {
        match &ctx.kind {
            ContextKind::EmptyTrigger => self.template_macros(),
            ContextKind::TagStart => self.elements(),
            // Degraded free-word context still matches element names, but
            // an empty word means no branch matched at all
            ContextKind::FreeText if !ctx.word.is_empty() => self.elements(),
            ContextKind::FreeText => Vec::new(),
            ContextKind::InsideTag => self.attributes(),
            ContextKind::InsideAttributeValue { attribute } => self.values_for(attribute),
        }
    }
}

impl Default for HtmlProvider {
    fn default() -> Self {
        Self::new()
    }
}
