//! Typed views over extracted records: struct fields, enum values, enum
//! variants, built-in function docs and step docs.

pub mod enums;
pub mod functions;
pub mod steps;
pub mod structs;

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

pub use enums::{parse_enum_definitions, parse_enum_variants};
pub use functions::{fn_name_from_file, parse_builtin_fn, parse_builtin_fns_dir};
pub use steps::{parse_step, parse_steps_dir, step_name_from_file};
pub use structs::parse_struct;

use crate::extract::ExtractError;
use crate::io::IoError;
use crate::models::FieldType;

#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("Failed to parse line '{0}' as valid rust field declaration")]
    Malformed(String),
    #[error("Field '{name}' has enum but not a string (got '{identifier}')")]
    EnumOnNonString { name: String, identifier: String },
    #[error("Failed to parse fn file '{}'", .0.display())]
    UnexpectedFnBlock(PathBuf),
}

impl From<IoError> for DeclarationError {
    fn from(err: IoError) -> Self {
        Self::Extract(ExtractError::Io(err))
    }
}

fn field_regex() -> &'static Regex {
    static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    FIELD_REGEX.get_or_init(|| Regex::new(r"(\w+):\s?([\w<>()]+)").expect("Invalid field regex"))
}

/// Parse a declaration line such as `pub to: Option<String>,` into its name and type.
pub fn parse_field(declaration: &str) -> Result<(String, FieldType), DeclarationError> {
    let caps = field_regex()
        .captures(declaration)
        .ok_or_else(|| DeclarationError::Malformed(declaration.to_string()))?;
    Ok((caps[1].to_string(), FieldType::from_raw(&caps[2])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pub to: String,", "to", "String", false)]
    #[case("pub(crate) overwrite: Option<bool>,", "overwrite", "bool", true)]
    #[case("size:u64,", "size", "u64", false)]
    #[case("pub list: Option<Vec<String>>,", "list", "Vec<String>", true)]
    fn parses_field_declarations(
        #[case] line: &str,
        #[case] name: &str,
        #[case] identifier: &str,
        #[case] optional: bool,
    ) {
        let (parsed_name, ty) = parse_field(line).unwrap();
        assert_eq!(parsed_name, name);
        assert_eq!(ty.identifier, identifier);
        assert_eq!(ty.optional, optional);
    }

    #[rstest]
    #[case("")]
    #[case("#[serde(default)]")]
    #[case("fn run(&self)")]
    fn rejects_malformed_declarations(#[case] line: &str) {
        let err = parse_field(line).unwrap_err();
        assert!(matches!(err, DeclarationError::Malformed(ref l) if l == line));
    }
}
