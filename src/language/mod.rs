//! Language resolver
//! Pure mapping from file extensions to language identifiers

/// Language associated with a tab's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Html,
    Css,
    Scss,
    Less,
    JavaScript,
    TypeScript,
    Python,
    Rust,
    Go,
    C,
    Cpp,
    Java,
    CSharp,
    Ruby,
    Php,
    Shell,
    Sql,
    Json,
    Yaml,
    Toml,
    Markdown,
    Xml,
    Svg,
    Vue,
    Svelte,
    Lua,
    /// Fallback for unknown extensions; has no completion provider
    PlainText,
}

impl Language {
    /// Resolve a language from a file name's extension.
    /// Unknown or missing extensions resolve to `PlainText`.
    pub fn from_file_name(name: &str) -> Self {
        let extension = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
            _ => return Language::PlainText,
        };
        Self::from_extension(extension)
    }

    /// Resolve a language from a bare extension (without the dot)
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "scss" | "sass" => Language::Scss,
            "less" => Language::Less,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" | "mts" => Language::TypeScript,
            "py" | "pyw" => Language::Python,
            "rs" => Language::Rust,
            "go" => Language::Go,
            "c" | "h" => Language::C,
            "cc" | "cpp" | "cxx" | "hpp" => Language::Cpp,
            "java" => Language::Java,
            "cs" => Language::CSharp,
            "rb" => Language::Ruby,
            "php" => Language::Php,
            "sh" | "bash" | "zsh" => Language::Shell,
            "sql" => Language::Sql,
            "json" => Language::Json,
            "yml" | "yaml" => Language::Yaml,
            "toml" => Language::Toml,
            "md" | "markdown" => Language::Markdown,
            "xml" => Language::Xml,
            "svg" => Language::Svg,
            "vue" => Language::Vue,
            "svelte" => Language::Svelte,
            "lua" => Language::Lua,
            "txt" => Language::PlainText,
            _ => Language::PlainText,
        }
    }

    /// Human-readable name for the status line
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Scss => "SCSS",
            Language::Less => "Less",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Rust => "Rust",
            Language::Go => "Go",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Shell => "Shell",
            Language::Sql => "SQL",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Toml => "TOML",
            Language::Markdown => "Markdown",
            Language::Xml => "XML",
            Language::Svg => "SVG",
            Language::Vue => "Vue",
            Language::Svelte => "Svelte",
            Language::Lua => "Lua",
            Language::PlainText => "Plain Text",
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
