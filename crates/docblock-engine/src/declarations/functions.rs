use std::path::Path;

use crate::extract::{ExtractError, Extractor, split_block_text};
use crate::io;
use crate::models::FnInfo;

use super::DeclarationError;

/// Derive a function struct name from a source file stem: `is_alive` → `IsAlive`.
pub fn fn_name_from_file(stem: &str) -> String {
    stem.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Read the documentation of `pub struct <fn_name>` in `file`.
///
/// A function's documentation sits on the struct itself, so the block must
/// hold comments only: exactly one record with an empty declaration.
pub fn parse_builtin_fn(
    extractor: &Extractor,
    file: &str,
    fn_name: &str,
) -> Result<FnInfo, DeclarationError> {
    let (path, text) = extractor.read(file)?;
    let starts_with = format!("pub struct {fn_name}");
    let mut records = split_block_text(&text, &starts_with, extractor.registry()).ok_or(
        ExtractError::BlockNotFound {
            starts_with,
            path: path.clone(),
        },
    )?;

    let record = match records.pop() {
        Some(record) if records.is_empty() && record.declaration.is_empty() => record,
        _ => return Err(DeclarationError::UnexpectedFnBlock(path)),
    };

    Ok(FnInfo {
        name: fn_name.to_string(),
        wiki: record.channels.wiki,
        demo: record.channels.demo,
        validation_rules: record.channels.extra,
    })
}

/// Parse every function source in `dir` (all `*.rs` except `mod.rs`), in file-name order.
pub fn parse_builtin_fns_dir(
    extractor: &Extractor,
    dir: &str,
) -> Result<Vec<FnInfo>, DeclarationError> {
    let dir = extractor.resolver().resolve(dir);
    let files = io::scan_rust_files(&dir)?;

    let mut fns = Vec::new();
    for file in files {
        let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem == "mod" {
            continue;
        }
        let fn_name = fn_name_from_file(stem);
        log::debug!("parsing fn {fn_name} from {}", file.display());
        fns.push(parse_builtin_fn(extractor, &path_arg(&file), &fn_name)?);
    }
    Ok(fns)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
