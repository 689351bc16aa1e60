//! SRG mapping file loader.
//!
//! Line format, whitespace separated:
//!
//! ```text
//! CL: <old/path/Class> <new/path/Class>
//! FD: <old/Owner/field> <new/Owner/field>
//! MD: <old/Owner/method> <oldSig> <new/Owner/method> [<newSig>]
//! PA: <old/Owner/method> <sig> <p0> ... <pN>
//! ```
//!
//! Loading is lenient: short lines, lines that are not valid UTF-8 and
//! unknown record kinds are counted and skipped, never reported as errors.
//! Only failures of the underlying reader abort a load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smol_str::SmolStr;
use tracing::{debug, info, trace};

use super::error::LoadError;
use super::tables::{
    ClassRename, FieldRename, MemberKey, MethodKey, MethodRename, ParameterNames, RenamingTables,
};
use crate::base::constants::{SRG_CLASS, SRG_FIELD, SRG_METHOD, SRG_PARAMETERS, SRG_PATH_SEPARATOR};

/// Load renaming tables from a mapping file.
pub fn load(path: impl AsRef<Path>) -> Result<RenamingTables, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let tables = read_lines(BufReader::new(file)).map_err(|e| LoadError::io(path, e))?;
    log_summary(&tables, &path.display().to_string());
    Ok(tables)
}

/// Load renaming tables from any buffered reader.
pub fn from_reader(reader: impl BufRead) -> Result<RenamingTables, LoadError> {
    let tables = read_lines(reader)?;
    log_summary(&tables, "reader");
    Ok(tables)
}

/// Parse renaming tables from mapping text.
pub fn parse_str(text: &str) -> RenamingTables {
    let mut tables = RenamingTables::default();
    for line in text.lines() {
        parse_line(&mut tables, line);
    }
    tables
}

fn read_lines(mut reader: impl BufRead) -> std::io::Result<RenamingTables> {
    let mut tables = RenamingTables::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        match std::str::from_utf8(&buf) {
            Ok(line) => parse_line(&mut tables, line),
            Err(_) => {
                let lossy = String::from_utf8_lossy(&buf);
                trace!(line = lossy.trim_end(), "skipping mapping line that is not UTF-8");
                tables.skipped_lines += 1;
            }
        }
    }
    Ok(tables)
}

fn log_summary(tables: &RenamingTables, source: &str) {
    info!(
        "Loaded {} fields, {} methods, {} method parameter lists, {} classes from {}",
        tables.field_count(),
        tables.method_count(),
        tables.parameter_list_count(),
        tables.class_count(),
        source
    );
    if tables.skipped_lines() > 0 || tables.unrecognized_lines() > 0 {
        debug!(
            skipped = tables.skipped_lines(),
            unrecognized = tables.unrecognized_lines(),
            "ignored mapping lines"
        );
    }
}

fn parse_line(tables: &mut RenamingTables, line: &str) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        if !tokens.is_empty() {
            trace!(line, "skipping short mapping line");
        }
        tables.skipped_lines += 1;
        return;
    }

    match tokens[0] {
        SRG_CLASS => {
            let (package, name) = split_path(tokens[1]);
            let old_name = if package.is_empty() {
                SmolStr::from(name)
            } else {
                SmolStr::from(format!("{package}.{name}"))
            };
            let entry = ClassRename {
                old_name: old_name.clone(),
                new_name: name_component(tokens[2]).into(),
            };
            if tables.classes.insert(old_name, entry).is_some() {
                debug!(line, "duplicate class mapping, keeping the later one");
            }
        }
        SRG_FIELD => {
            let (owner, name) = split_path(tokens[1]);
            let entry = FieldRename {
                owner: owner.clone(),
                old_name: name.into(),
                new_name: name_component(tokens[2]).into(),
            };
            if tables
                .fields
                .insert(MemberKey::new(owner, name), entry)
                .is_some()
            {
                debug!(line, "duplicate field mapping, keeping the later one");
            }
        }
        SRG_METHOD => {
            let Some(new_path) = tokens.get(3) else {
                trace!(line, "method mapping without a new name");
                tables.skipped_lines += 1;
                return;
            };
            let (owner, name) = split_path(tokens[1]);
            let signature = tokens[2];
            let entry = MethodRename {
                owner: owner.clone(),
                old_name: name.into(),
                signature: signature.into(),
                new_name: name_component(new_path).into(),
            };
            if tables
                .methods
                .insert(MethodKey::new(owner, name, signature), entry)
                .is_some()
            {
                debug!(line, "duplicate method mapping, keeping the later one");
            }
        }
        SRG_PARAMETERS => {
            let (owner, method) = split_path(tokens[1]);
            let signature = tokens[2];
            let entry = ParameterNames {
                owner: owner.clone(),
                method: method.into(),
                signature: signature.into(),
                names: tokens[3..].iter().map(|&n| SmolStr::from(n)).collect(),
            };
            if tables
                .parameters
                .insert(MethodKey::new(owner, method, signature), entry)
                .is_some()
            {
                debug!(line, "duplicate parameter mapping, keeping the later one");
            }
        }
        _ => {
            trace!(line, "unrecognized mapping line");
            tables.unrecognized_lines += 1;
        }
    }
}

/// Last segment of a `/`-separated path: `a/b/c` → `c`.
pub fn name_component(path: &str) -> &str {
    path.rsplit(SRG_PATH_SEPARATOR).next().unwrap_or(path)
}

/// Everything before the last segment, joined with `.`: `a/b/c` → `a.b`.
pub fn owner_component(path: &str) -> SmolStr {
    match path.rsplit_once(SRG_PATH_SEPARATOR) {
        Some((owner, _)) => owner.replace(SRG_PATH_SEPARATOR, ".").into(),
        None => SmolStr::default(),
    }
}

fn split_path(path: &str) -> (SmolStr, &str) {
    (owner_component(path), name_component(path))
}
