use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::extract::{ExtractError, Extractor, split_block_text};
use crate::models::VariantInfo;

use super::DeclarationError;

fn verify_enum_regex() -> &'static Regex {
    static VERIFY_ENUM_REGEX: OnceLock<Regex> = OnceLock::new();
    VERIFY_ENUM_REGEX.get_or_init(|| {
        Regex::new(r#"verify_enum!\("(\w+)",\s?([\w.&]+),\s?("\S+"(?:\s?\|\s?"\S+")*)\)"#)
            .expect("Invalid verify_enum regex")
    })
}

/// Collect the allowed values of every `verify_enum!("field", expr, "a" | "b")` call in `text`.
///
/// A field validated more than once keeps the values of its last call.
pub fn parse_enum_definitions(text: &str) -> BTreeMap<String, Vec<String>> {
    verify_enum_regex()
        .captures_iter(text)
        .map(|caps| {
            let values = caps[3]
                .split('|')
                .map(|value| value.trim().trim_matches('"').to_string())
                .collect();
            (caps[1].to_string(), values)
        })
        .collect()
}

/// Read the documented variants of `pub enum <enum_name>` in `file`.
///
/// The variant name is the declaration line without its trailing comma.
pub fn parse_enum_variants(
    extractor: &Extractor,
    file: &str,
    enum_name: &str,
) -> Result<Vec<VariantInfo>, DeclarationError> {
    let (path, text) = extractor.read(file)?;
    let starts_with = format!("pub enum {enum_name}");
    let records = split_block_text(&text, &starts_with, extractor.registry()).ok_or(
        ExtractError::BlockNotFound {
            starts_with,
            path,
        },
    )?;

    Ok(records
        .into_iter()
        .map(|record| {
            let declaration = record.declaration.as_str();
            VariantInfo {
                name: declaration.strip_suffix(',').unwrap_or(declaration).to_string(),
                wiki: record.channels.wiki,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::PathResolver;
    use crate::tests::{create_test_file, create_test_source_dir};
    use pretty_assertions::assert_eq;

    const PERMISSION_RS: &str = r#"#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum PermissionLevel {
    /// Always allowed
    Normal,
    /// Asks once per workflow
    //- Shown in **bold** in the prompt
    Important,
    /// Requires confirmation every time
    Sensitive
}
"#;

    #[test]
    fn reads_enum_variants() {
        let dir = create_test_source_dir();
        create_test_file(&dir, "permission.rs", PERMISSION_RS);
        let extractor = Extractor::new(PathResolver::new(dir.path()));

        let variants = parse_enum_variants(&extractor, "@/permission.rs", "PermissionLevel").unwrap();

        assert_eq!(
            variants,
            vec![
                VariantInfo {
                    name: "Normal".to_string(),
                    wiki: Some("Always allowed".to_string()),
                },
                VariantInfo {
                    name: "Important".to_string(),
                    wiki: Some("Asks once per workflow\n\nShown in **bold** in the prompt".to_string()),
                },
                VariantInfo {
                    name: "Sensitive".to_string(),
                    wiki: Some("Requires confirmation every time".to_string()),
                },
            ]
        );
    }

    #[test]
    fn missing_enum_is_block_not_found() {
        let dir = create_test_source_dir();
        create_test_file(&dir, "permission.rs", PERMISSION_RS);
        let extractor = Extractor::new(PathResolver::new(dir.path()));

        let err = parse_enum_variants(&extractor, "@/permission.rs", "PermissionKey").unwrap_err();
        assert!(err.to_string().contains("pub enum PermissionKey"));
    }

    #[test]
    fn collects_values_per_field() {
        let text = r#"
impl Verifiable for StepLink {
    fn verify_self(&self, located: &String) -> Result<()> {
        verify_enum!("mode", self.mode, "hard" | "soft")?;
        verify_enum!("target", &self.target, "File"|"Dir" | "Auto")?;
        Ok(())
    }
}
"#;
        let map = parse_enum_definitions(text);

        assert_eq!(map.len(), 2);
        assert_eq!(map["mode"], vec!["hard", "soft"]);
        assert_eq!(map["target"], vec!["File", "Dir", "Auto"]);
    }

    #[test]
    fn single_value_enum() {
        let map = parse_enum_definitions(r#"verify_enum!("kind", self.kind, "Only")"#);
        assert_eq!(map["kind"], vec!["Only"]);
    }

    #[test]
    fn last_definition_wins() {
        let text = r#"verify_enum!("a", x, "1" | "2") verify_enum!("a", y, "3")"#;
        assert_eq!(parse_enum_definitions(text)["a"], vec!["3"]);
    }

    #[test]
    fn no_definitions() {
        assert!(parse_enum_definitions("fn main() {}").is_empty());
    }
}
