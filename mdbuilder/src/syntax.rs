//! Language tags for fenced code blocks

use std::fmt;

macro_rules! syntax_highlight {
    ($($(#[$attr:meta])* $variant:ident => $tag:literal,)*) => {
        /// Language tag written after the opening code fence
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum SyntaxHighlight {
            $($(#[$attr])* $variant,)*
        }

        impl SyntaxHighlight {
            /// The tag as it appears in the fence
            pub fn as_str(self) -> &'static str {
                match self {
                    $(SyntaxHighlight::$variant => $tag,)*
                }
            }
        }
    };
}

syntax_highlight! {
    /// No language tag
    #[default]
    None => "",
    /// Plain text
    Text => "text",
    /// API Blueprint (highlighted as Markdown)
    ApiBlueprint => "markdown",
    /// Shell scripts
    Shell => "shell",
    /// Go
    Go => "go",
    /// JSON
    Json => "json",
    /// YAML
    Yaml => "yaml",
    /// TOML
    Toml => "toml",
    /// XML
    Xml => "xml",
    /// HTML
    Html => "html",
    /// CSS
    Css => "css",
    /// JavaScript
    JavaScript => "javascript",
    /// TypeScript
    TypeScript => "typescript",
    /// SQL
    Sql => "sql",
    /// C
    C => "c",
    /// C#
    CSharp => "csharp",
    /// C++
    CPlusPlus => "cpp",
    /// Java
    Java => "java",
    /// Kotlin
    Kotlin => "kotlin",
    /// PHP
    Php => "php",
    /// Python
    Python => "python",
    /// Ruby
    Ruby => "ruby",
    /// Swift
    Swift => "swift",
    /// Scala
    Scala => "scala",
    /// Rust
    Rust => "rust",
    /// Objective-C
    ObjectiveC => "objectivec",
    /// Perl
    Perl => "perl",
    /// Lua
    Lua => "lua",
    /// Dart
    Dart => "dart",
    /// Clojure
    Clojure => "clojure",
    /// Groovy
    Groovy => "groovy",
    /// R
    R => "r",
    /// Haskell
    Haskell => "haskell",
    /// Erlang
    Erlang => "erlang",
    /// Elixir
    Elixir => "elixir",
    /// OCaml
    OCaml => "ocaml",
    /// Julia
    Julia => "julia",
    /// Scheme
    Scheme => "scheme",
    /// F#
    FSharp => "fsharp",
    /// CoffeeScript
    CoffeeScript => "coffeescript",
    /// VB.NET
    VbNet => "vbnet",
    /// TeX
    TeX => "tex",
    /// Unified diffs
    Diff => "diff",
    /// Apache configuration
    Apache => "apache",
    /// Dockerfile
    Dockerfile => "dockerfile",
    /// Mermaid diagrams
    Mermaid => "mermaid",
}

impl fmt::Display for SyntaxHighlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(SyntaxHighlight::None.as_str(), "");
        assert_eq!(SyntaxHighlight::Rust.to_string(), "rust");
        assert_eq!(SyntaxHighlight::CPlusPlus.as_str(), "cpp");
        assert_eq!(SyntaxHighlight::ApiBlueprint.as_str(), "markdown");
        assert_eq!(SyntaxHighlight::default(), SyntaxHighlight::None);
    }
}
