use serde::Serialize;

/// One documented variant of a `pub enum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
}

/// Documentation of a built-in function, read from the comments on its
/// argument struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FnInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// Raw-extra channel content, unsplit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rules: Option<String>,
}
