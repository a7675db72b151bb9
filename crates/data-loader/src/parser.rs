//! Parser for the movie catalog file.
//!
//! The catalog is a CSV file with a header row:
//!
//! ```text
//! title,year,genres,overview
//! Arrival,2016,"Drama, Sci-Fi","A linguist is recruited by the military..."
//! ```
//!
//! The `genres` field is a comma-separated tag list inside a single CSV
//! field, and overviews routinely contain commas, quotes, and newlines, so
//! records are split with a small quote-aware state machine rather than a
//! plain `split(',')`.

use crate::error::{DataLoadError, Result};
use crate::types::{Movie, MovieCatalog, MovieId};
use std::fs;
use std::path::Path;
use tracing::info;

/// Expected header fields, in order
const HEADER: [&str; 4] = ["title", "year", "genres", "overview"];

/// Load a movie catalog from a CSV file.
///
/// Movie ids are assigned sequentially in file order. Records with an
/// empty `overview` or `genres` field load normally (the fields normalize
/// to empty); records with a missing or unparsable `year` are rejected.
pub fn load_catalog(path: &Path) -> Result<MovieCatalog> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = read_file(path)?;
    let records = parse_records(&content, &file_name)?;

    let mut records = records.into_iter();
    let (header_line, header) = records
        .next()
        .ok_or_else(|| DataLoadError::ValidationError(format!("{file_name} is empty")))?;
    validate_header(&header, header_line)?;

    let mut catalog = MovieCatalog::new();
    for (line_no, fields) in records {
        let movie = parse_movie(&fields, catalog.len() as MovieId, &file_name, line_no)?;
        catalog.insert_movie(movie);
    }

    info!(movies = catalog.len(), file = %file_name, "loaded movie catalog");
    Ok(catalog)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            DataLoadError::IoError(e)
        }
    })
}

fn validate_header(fields: &[String], line: usize) -> Result<()> {
    let matches = fields.len() == HEADER.len()
        && fields
            .iter()
            .zip(HEADER)
            .all(|(field, expected)| field.trim().eq_ignore_ascii_case(expected));
    if !matches {
        return Err(DataLoadError::ValidationError(format!(
            "expected header 'title,year,genres,overview' at line {line}, found '{}'",
            fields.join(",")
        )));
    }
    Ok(())
}

/// Parse one data record into a Movie
fn parse_movie(fields: &[String], id: MovieId, file: &str, line: usize) -> Result<Movie> {
    if fields.len() != HEADER.len() {
        return Err(DataLoadError::FieldCountMismatch {
            expected: HEADER.len(),
            found: fields.len(),
            line,
        });
    }

    let title = fields[0].trim().to_string();
    if title.is_empty() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: "Missing title".to_string(),
        });
    }

    // The host rejects missing years rather than guessing a default
    let year_str = fields[1].trim();
    let year = year_str.parse().map_err(|_| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid year: '{year_str}'"),
    })?;

    Ok(Movie {
        id,
        title,
        year,
        genres: parse_genres(&fields[2]),
        overview: fields[3].trim().to_string(),
    })
}

/// Parse the comma-separated tag list inside the genres field.
///
/// Example: "Drama, Sci-Fi" -> vec!["Drama", "Sci-Fi"]
///
/// Missing genres normalize to an empty list, never an error.
fn parse_genres(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

/// Split file content into CSV records of fields.
///
/// Handles RFC-4180-style quoting: quoted fields may contain commas,
/// newlines, and doubled quotes. Returns each record tagged with the line
/// number it started on, for error reporting. Blank lines are skipped.
fn parse_records(content: &str, file: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted_field = false;
    let mut line_no = 1;
    let mut record_line = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // Doubled quote is an escaped literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() && !quoted_field => {
                in_quotes = true;
                quoted_field = true;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                quoted_field = false;
            }
            '\n' if !in_quotes => {
                line_no += 1;
                if !fields.is_empty() || !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                quoted_field = false;
                record_line = line_no;
            }
            '\r' if !in_quotes => {}
            '\n' => {
                line_no += 1;
                field.push('\n');
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: record_line,
            reason: "Unterminated quoted field".to_string(),
        });
    }

    // Final record when the file doesn't end with a newline
    if !fields.is_empty() || !field.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }

    Ok(records)
}
