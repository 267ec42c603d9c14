use crate::core::chem::element::Element;
use crate::core::io::traits::AtomFile;
use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XyzMetadata {
    /// The free-form second line of the file.
    pub comment: String,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidCount { value: String },
    #[error("Required {column} column is missing")]
    MissingField { column: &'static str },
    #[error("Invalid float in {column} column (value: '{value}')")]
    InvalidFloat { column: &'static str, value: String },
    #[error("Unknown element '{value}'")]
    UnknownElement { value: String },
}

/// The plain XYZ coordinate format: an atom count line, a comment line, then one
/// `<element> <x> <y> <z>` record per atom.
///
/// Only the first frame of a multi-frame file is read. Atom ids are assigned
/// 1..=N in file order; the element column accepts a symbol or an atomic number.
pub struct XyzFile;

fn parse_coordinate(
    value: Option<&str>,
    column: &'static str,
    line: usize,
) -> Result<f64, XyzError> {
    let value = value.ok_or(XyzError::Parse {
        line,
        kind: XyzParseErrorKind::MissingField { column },
    })?;
    value.parse().map_err(|_| XyzError::Parse {
        line,
        kind: XyzParseErrorKind::InvalidFloat {
            column,
            value: value.into(),
        },
    })
}

impl AtomFile for XyzFile {
    type Metadata = XyzMetadata;
    type Error = XyzError;

    #[instrument(skip_all, name = "xyz_read")]
    fn read_from(reader: &mut impl BufRead) -> Result<(Vec<Atom>, Self::Metadata), Self::Error> {
        let mut lines = reader.lines();

        let count_line = lines
            .next()
            .transpose()?
            .ok_or_else(|| XyzError::MissingRecord("atom count line".into()))?;
        let count: usize = count_line.trim().parse().map_err(|_| XyzError::Parse {
            line: 1,
            kind: XyzParseErrorKind::InvalidCount {
                value: count_line.trim().into(),
            },
        })?;

        let comment = lines
            .next()
            .transpose()?
            .ok_or_else(|| XyzError::MissingRecord("comment line".into()))?;
        let metadata = XyzMetadata {
            comment: comment.trim_end().to_string(),
        };

        let mut atoms = Vec::with_capacity(count.min(1024));
        for (idx, line_res) in lines.enumerate() {
            if atoms.len() == count {
                break;
            }
            let line = line_res?;
            let line_num = idx + 3;
            let mut fields = line.split_whitespace();

            let Some(element_str) = fields.next() else {
                continue;
            };
            let element: Element = element_str.parse().map_err(|_| XyzError::Parse {
                line: line_num,
                kind: XyzParseErrorKind::UnknownElement {
                    value: element_str.into(),
                },
            })?;
            let x = parse_coordinate(fields.next(), "x", line_num)?;
            let y = parse_coordinate(fields.next(), "y", line_num)?;
            let z = parse_coordinate(fields.next(), "z", line_num)?;

            let id = i32::try_from(atoms.len() + 1).map_err(|_| {
                XyzError::Inconsistency(format!("too many atoms at line {}", line_num))
            })?;
            atoms.push(Atom::new(id, element, Point3::new(x, y, z)));
        }

        if atoms.len() != count {
            return Err(XyzError::Inconsistency(format!(
                "header declares {} atoms but {} were found",
                count,
                atoms.len()
            )));
        }
        debug!(atoms = count, "Read XYZ frame.");
        Ok((atoms, metadata))
    }

    fn write_to(
        atoms: &[Atom],
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "{}", atoms.len())?;
        writeln!(writer, "{}", metadata.comment.lines().next().unwrap_or(""))?;
        for atom in atoms {
            writeln!(
                writer,
                "{:<2} {:>15.8} {:>15.8} {:>15.8}",
                atom.element.symbol(),
                atom.x(),
                atom.y(),
                atom.z()
            )?;
        }
        Ok(())
    }
}
