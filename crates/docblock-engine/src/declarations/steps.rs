use std::path::Path;

use crate::extract::{ExtractError, Extractor, comments_in_block_text, split_block_text};
use crate::io;
use crate::models::{StepExtra, StepField, StepInfo};

use super::DeclarationError;
use super::structs::field_from_record;

/// Derive a step name from a source file stem: `copy` → `Copy`, `mv` → `Move`.
pub fn step_name_from_file(stem: &str) -> String {
    if stem == "mv" {
        return "Move".to_string();
    }
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read the documentation of `pub struct Step<step_name>` plus the notes inside
/// its `run`, `reverse_run` and `get_manifest` functions.
pub fn parse_step(
    extractor: &Extractor,
    file: &str,
    step_name: &str,
) -> Result<StepInfo, DeclarationError> {
    let (path, text) = extractor.read(file)?;
    let registry = extractor.registry();

    let starts_with = format!("pub struct Step{step_name}");
    let records = split_block_text(&text, &starts_with, registry).ok_or(
        ExtractError::BlockNotFound {
            starts_with,
            path,
        },
    )?;

    let fields = records
        .into_iter()
        .map(|record| -> Result<StepField, DeclarationError> {
            let rules = record
                .extra()
                .map(|extra| extra.split('\n').map(str::to_string).collect())
                .unwrap_or_default();
            Ok(StepField {
                field: field_from_record(record)?,
                rules,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let extra = StepExtra {
        run: comments_in_block_text(&text, "fn run", registry)
            .wiki
            .unwrap_or_default(),
        reverse_run: comments_in_block_text(&text, "fn reverse_run", registry).wiki,
        manifest: comments_in_block_text(&text, "fn get_manifest", registry)
            .extra
            .map(|extra| extra.split('\n').map(str::to_string).collect()),
    };

    Ok(StepInfo {
        name: step_name.to_string(),
        fields,
        extra,
    })
}

/// Parse every step source in `dir` (all `*.rs` except `mod.rs`), in file-name order.
pub fn parse_steps_dir(extractor: &Extractor, dir: &str) -> Result<Vec<StepInfo>, DeclarationError> {
    let dir = extractor.resolver().resolve(dir);
    let files = io::scan_rust_files(&dir)?;

    let mut steps = Vec::new();
    for file in files {
        let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem == "mod" {
            continue;
        }
        let step_name = step_name_from_file(stem);
        log::debug!("parsing step {step_name} from {}", file.display());
        steps.push(parse_step(extractor, &path_arg(&file), &step_name)?);
    }
    Ok(steps)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
