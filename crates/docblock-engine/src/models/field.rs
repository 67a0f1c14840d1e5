use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldType {
    /// Type name with any `Option<...>` wrapper removed.
    pub identifier: String,
    pub optional: bool,
    /// Allowed string values declared through `verify_enum!`.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl FieldType {
    pub fn from_raw(raw: &str) -> Self {
        match raw.strip_prefix("Option<").and_then(|t| t.strip_suffix('>')) {
            Some(inner) => Self {
                identifier: inner.to_string(),
                optional: true,
                enum_values: None,
            },
            None => Self {
                identifier: raw.to_string(),
                optional: false,
                enum_values: None,
            },
        }
    }
}

/// A documented struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepField {
    #[serde(flatten)]
    pub field: FieldInfo,
    /// One entry per line of the raw-extra channel.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepExtra {
    pub run: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_run: Option<String>,
    /// Lines of the raw-extra channel inside `get_manifest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub name: String,
    pub fields: Vec<StepField>,
    pub extra: StepExtra,
}
