//! Channel registry and first-match prefix classification.
//!
//! A channel is a named category of annotation content. Each channel owns one
//! or more comment prefixes and a renderer that turns its accumulated lines
//! into the final value. The registry is ordered: flattening it yields the
//! prefix table, and the first prefix a line starts with wins. When a channel
//! carries a specific and a bare form of the same prefix (`"//# "` and
//! `"//#"`), the specific form must come first or it is never reached.

use serde::Serialize;

use super::fence::PreservedRegion;
use super::join::graceful_join_markdown;

/// Plain `//` comments that belong to no channel are dropped but never end a record.
pub const COMMENT_MARKER: &str = "//";

const SNIPPET_MARGIN: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKey {
    /// Long-form markdown description.
    Wiki,
    /// Example snippet.
    Demo,
    /// Raw extra text such as validation rules.
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Paragraph join through [`graceful_join_markdown`].
    Markdown,
    /// Indented block when the snippet opens with a code fence, plain lines otherwise.
    Snippet,
    /// Plain newline join.
    Lines,
}

impl Renderer {
    /// Render an accumulated stack. An empty stack is always absent.
    pub fn render(self, lines: &[String]) -> Option<String> {
        if lines.is_empty() {
            return None;
        }
        let text = match self {
            Renderer::Markdown => graceful_join_markdown(lines),
            Renderer::Snippet if PreservedRegion::is_fence(&lines[0]) => {
                let mut indented = vec![String::new()];
                indented.extend(lines.iter().map(|line| format!("{SNIPPET_MARGIN}{line}")));
                indented.join("\n")
            }
            Renderer::Snippet | Renderer::Lines => lines.join("\n"),
        };
        Some(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDef {
    pub key: ChannelKey,
    pub prefixes: Vec<String>,
    pub renderer: Renderer,
}

impl ChannelDef {
    pub fn new(key: ChannelKey, prefixes: &[&str], renderer: Renderer) -> Self {
        Self {
            key,
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            renderer,
        }
    }
}

/// A flattened `(prefix, channel)` pair, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixBinding {
    pub prefix: String,
    pub key: ChannelKey,
}

/// Ordered set of channel definitions plus the prefix table derived from it.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    channels: Vec<ChannelDef>,
    bindings: Vec<PrefixBinding>,
}

impl ChannelRegistry {
    /// Definitions sharing a key are merged into the first one: its renderer is
    /// kept and later prefixes are appended. The prefix table keeps the order
    /// the definitions were given in.
    pub fn new(defs: Vec<ChannelDef>) -> Self {
        let bindings = defs
            .iter()
            .flat_map(|def| {
                def.prefixes.iter().map(|prefix| PrefixBinding {
                    prefix: prefix.clone(),
                    key: def.key,
                })
            })
            .collect();

        let mut channels: Vec<ChannelDef> = Vec::with_capacity(defs.len());
        for def in defs {
            match channels.iter_mut().find(|c| c.key == def.key) {
                Some(existing) => existing.prefixes.extend(def.prefixes),
                None => channels.push(def),
            }
        }
        Self { channels, bindings }
    }

    pub fn channels(&self) -> &[ChannelDef] {
        &self.channels
    }

    pub fn bindings(&self) -> &[PrefixBinding] {
        &self.bindings
    }

    /// First binding whose prefix starts `line` wins; returns its channel and the stripped tail.
    pub fn classify<'a>(&self, line: &'a str) -> Option<(ChannelKey, &'a str)> {
        self.bindings.iter().find_map(|binding| {
            line.strip_prefix(binding.prefix.as_str())
                .map(|rest| (binding.key, rest))
        })
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new(vec![
            ChannelDef::new(ChannelKey::Wiki, &["/// ", "//- "], Renderer::Markdown),
            ChannelDef::new(ChannelKey::Demo, &["//# ", "//#"], Renderer::Snippet),
            ChannelDef::new(ChannelKey::Extra, &["//@ "], Renderer::Lines),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn stack(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn flattened_table_preserves_order() {
        let registry = ChannelRegistry::default();
        let prefixes: Vec<_> = registry
            .bindings()
            .iter()
            .map(|b| (b.prefix.as_str(), b.key))
            .collect();
        assert_eq!(
            prefixes,
            vec![
                ("/// ", ChannelKey::Wiki),
                ("//- ", ChannelKey::Wiki),
                ("//# ", ChannelKey::Demo),
                ("//#", ChannelKey::Demo),
                ("//@ ", ChannelKey::Extra),
            ]
        );
    }

    #[rstest]
    #[case("/// Hello", Some((ChannelKey::Wiki, "Hello")))]
    #[case("//- Translated", Some((ChannelKey::Wiki, "Translated")))]
    #[case("//# demo text", Some((ChannelKey::Demo, "demo text")))]
    #[case("//#tight", Some((ChannelKey::Demo, "tight")))]
    #[case("//@ must exist", Some((ChannelKey::Extra, "must exist")))]
    #[case("//@missing-space", None)]
    #[case("// plain comment", None)]
    #[case("///", None)]
    #[case("name: String,", None)]
    fn classify_default_registry(
        #[case] line: &str,
        #[case] expected: Option<(ChannelKey, &str)>,
    ) {
        assert_eq!(ChannelRegistry::default().classify(line), expected);
    }

    #[test]
    fn generic_prefix_listed_first_shadows_specific_one() {
        let registry = ChannelRegistry::new(vec![ChannelDef::new(
            ChannelKey::Demo,
            &["//#", "//# "],
            Renderer::Lines,
        )]);
        assert_eq!(
            registry.classify("//# demo text"),
            Some((ChannelKey::Demo, " demo text"))
        );
    }

    #[test]
    fn duplicate_keys_merge_into_first_definition() {
        let registry = ChannelRegistry::new(vec![
            ChannelDef::new(ChannelKey::Extra, &["//@ "], Renderer::Lines),
            ChannelDef::new(ChannelKey::Wiki, &["/// "], Renderer::Markdown),
            ChannelDef::new(ChannelKey::Extra, &["//! "], Renderer::Markdown),
        ]);

        assert_eq!(
            registry.channels(),
            &[
                ChannelDef::new(ChannelKey::Extra, &["//@ ", "//! "], Renderer::Lines),
                ChannelDef::new(ChannelKey::Wiki, &["/// "], Renderer::Markdown),
            ]
        );
        let prefixes: Vec<_> = registry.bindings().iter().map(|b| b.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["//@ ", "/// ", "//! "]);
        assert_eq!(registry.classify("//! b"), Some((ChannelKey::Extra, "b")));
    }

    #[test]
    fn earlier_channel_wins_shared_prefix() {
        let registry = ChannelRegistry::new(vec![
            ChannelDef::new(ChannelKey::Extra, &["//"], Renderer::Lines),
            ChannelDef::new(ChannelKey::Wiki, &["/// "], Renderer::Markdown),
        ]);
        assert_eq!(
            registry.classify("/// doc"),
            Some((ChannelKey::Extra, "/ doc"))
        );
    }

    #[rstest]
    #[case(Renderer::Markdown)]
    #[case(Renderer::Snippet)]
    #[case(Renderer::Lines)]
    fn empty_stack_renders_absent(#[case] renderer: Renderer) {
        assert_eq!(renderer.render(&[]), None);
    }

    #[test]
    fn markdown_renderer_joins_paragraphs() {
        assert_eq!(
            Renderer::Markdown.render(&stack(&["a", "b"])),
            Some("a\n\nb".to_string())
        );
    }

    #[test]
    fn snippet_renderer_indents_fenced_code() {
        let rendered = Renderer::Snippet.render(&stack(&["```toml", "a = 1", "```"]));
        assert_eq!(rendered, Some("\n  ```toml\n  a = 1\n  ```".to_string()));
    }

    #[test]
    fn snippet_renderer_plain_lines() {
        let rendered = Renderer::Snippet.render(&stack(&["`\"C:/\"`", "`\"D:/\"`"]));
        assert_eq!(rendered, Some("`\"C:/\"`\n`\"D:/\"`".to_string()));
    }

    #[test]
    fn lines_renderer_keeps_fences_tight() {
        let rendered = Renderer::Lines.render(&stack(&["```", "x", "```"]));
        assert_eq!(rendered, Some("```\nx\n```".to_string()));
    }
}
