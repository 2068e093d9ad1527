//! Parsing of the delimited catalog file.
//!
//! The format is a header row followed by comma-separated rows of
//! `(id, name, type, hp, attack, can_evolve)`. A row that is empty or
//! whose first column is blank ends the data (a sentinel, not an error).
//! Non-numeric id/hp/attack fields are fatal: the program cannot run
//! without a valid catalog.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::catalog::types::CatalogItem;
use crate::{HoenndexError, Result};

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        HoenndexError::Catalog(format!("failed to open catalog file {}: {}", path.display(), e))
    })?;
    parse(BufReader::new(file))
}

pub fn parse<R: BufRead>(reader: R) -> Result<Vec<CatalogItem>> {
    let mut items = Vec::new();
    let mut header_seen = false;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if !header_seen {
            header_seen = true;
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields[0].trim().is_empty() {
            break;
        }
        let item = parse_row(&fields, line_no + 1)?;
        if item.id as usize != items.len() + 1 {
            return Err(HoenndexError::Catalog(format!(
                "line {}: id {} does not match its position {}",
                line_no + 1,
                item.id,
                items.len() + 1
            )));
        }
        items.push(item);
    }
    Ok(items)
}

fn parse_row(fields: &[&str], line_no: usize) -> Result<CatalogItem> {
    if fields.len() < 6 {
        return Err(HoenndexError::Catalog(format!(
            "line {}: expected 6 columns, found {}",
            line_no,
            fields.len()
        )));
    }
    Ok(CatalogItem {
        id: parse_number(fields[0], "id", line_no)?,
        name: fields[1].trim().to_string(),
        poke_type: fields[2].trim().to_string(),
        hp: parse_number(fields[3], "hp", line_no)?,
        attack: parse_number(fields[4], "attack", line_no)?,
        // Converted to a real boolean here, once: only the exact word
        // TRUE (any casing) counts as evolvable.
        can_evolve: fields[5].trim().eq_ignore_ascii_case("true"),
    })
}

fn parse_number<T: std::str::FromStr>(field: &str, column: &str, line_no: usize) -> Result<T> {
    field.trim().parse().map_err(|_| {
        HoenndexError::Catalog(format!(
            "line {}: non-numeric {} field '{}'",
            line_no,
            column,
            field.trim()
        ))
    })
}
