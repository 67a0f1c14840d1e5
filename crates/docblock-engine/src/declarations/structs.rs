use crate::extract::{ExtractError, Extractor, split_block_text};
use crate::models::{FieldInfo, Record};

use super::{DeclarationError, parse_enum_definitions, parse_field};

/// Read every documented field of `pub struct <struct_name>` in `file`.
///
/// Enum values declared in the same file are attached to the matching field,
/// which must then be a `String`.
pub fn parse_struct(
    extractor: &Extractor,
    file: &str,
    struct_name: &str,
) -> Result<Vec<FieldInfo>, DeclarationError> {
    let (path, text) = extractor.read(file)?;
    let starts_with = format!("pub struct {struct_name}");
    let records = split_block_text(&text, &starts_with, extractor.registry()).ok_or(
        ExtractError::BlockNotFound {
            starts_with,
            path,
        },
    )?;
    let enums = parse_enum_definitions(&text);

    records
        .into_iter()
        .map(|record| -> Result<FieldInfo, DeclarationError> {
            let mut field = field_from_record(record)?;
            if let Some(values) = enums.get(&field.name) {
                if field.ty.identifier != "String" {
                    return Err(DeclarationError::EnumOnNonString {
                        name: field.name,
                        identifier: field.ty.identifier,
                    });
                }
                field.ty.enum_values = Some(values.clone());
            }
            Ok(field)
        })
        .collect()
}

pub(crate) fn field_from_record(record: Record) -> Result<FieldInfo, DeclarationError> {
    let (name, ty) = parse_field(&record.declaration)?;
    Ok(FieldInfo {
        name,
        ty,
        wiki: record.channels.wiki,
        demo: record.channels.demo,
    })
}
