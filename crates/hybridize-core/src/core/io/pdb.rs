use crate::core::io::columns::{ColumnError, FixedWidthField};
use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::element::{Element, ParseElementError};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

const COORDINATE_RECORD: &str = "HETATM";
const CONNECTIVITY_RECORD: &str = "CONECT";

/// Columns 8-11 of a `CONECT` line: the atom number the record belongs to.
///
/// Read and validated, but never used for indexing. Records are matched to atoms by
/// their ordinal position instead.
const CONECT_ATOM_NUMBER: FixedWidthField = FixedWidthField::new("atom number", 7, 11);

const SYMBOL_FIELD: usize = 2;
const COORDINATE_FIELDS: [(char, usize); 3] = [('x', 4), ('y', 5), ('z', 6)];
const MIN_COORDINATE_FIELDS: usize = 7;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed record on line {line}: {kind}\n  | {content}")]
    MalformedRecord {
        line: usize,
        content: String,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("HETATM record has {found} whitespace-delimited fields (at least 7 required)")]
    TooFewFields { found: usize },
    #[error(transparent)]
    UnknownElement(#[from] ParseElementError),
    #[error("Invalid finite float for {axis} coordinate (value: '{value}')")]
    InvalidCoordinate { axis: char, value: String },
    #[error(transparent)]
    Column(#[from] ColumnError),
    #[error("Invalid bonded atom number (value: '{value}')")]
    InvalidPartner { value: String },
    #[error("Bonded atom number {partner} does not refer to any of the {atom_count} atoms")]
    PartnerOutOfRange { partner: usize, atom_count: usize },
    #[error("CONECT record #{ordinal} has no matching HETATM record (only {atom_count} atoms)")]
    ExcessConnectivity { ordinal: usize, atom_count: usize },
    #[error("HETATM record appears after the CONECT block has started")]
    CoordinateAfterConnectivity,
    #[error("Record is not valid UTF-8")]
    InvalidEncoding,
}

impl PdbError {
    fn malformed(line: usize, content: &str, kind: impl Into<PdbParseErrorKind>) -> Self {
        Self::MalformedRecord {
            line,
            content: content.to_string(),
            kind: kind.into(),
        }
    }
}

/// Parsed coordinate and connectivity records.
///
/// `atoms[k]` is the k-th `HETATM` record of the file, and its bonded indices come from
/// the k-th `CONECT` record. Atoms with no matching `CONECT` record have no bonds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbRecords {
    pub atoms: Vec<Atom>,
    /// Number of `CONECT` records consumed; never larger than `atoms.len()`.
    pub connectivity_records: usize,
}

impl PdbRecords {
    /// Returns `true` if every atom received a connectivity record.
    pub fn is_fully_connected(&self) -> bool {
        self.connectivity_records == self.atoms.len()
    }
}

/// Reader for the single-model, explicit-hydrogen PDB subset: a contiguous block of
/// `HETATM` records followed by a contiguous block of `CONECT` records.
pub struct PdbFile;

impl MolecularFile for PdbFile {
    type Output = PdbRecords;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut records = PdbRecords::default();

        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_num += 1;

            let raw = strip_line_ending(&buf);
            if !raw.starts_with(COORDINATE_RECORD.as_bytes())
                && !raw.starts_with(CONNECTIVITY_RECORD.as_bytes())
            {
                continue;
            }
            let line = std::str::from_utf8(raw).map_err(|_| {
                PdbError::malformed(
                    line_num,
                    &String::from_utf8_lossy(raw),
                    PdbParseErrorKind::InvalidEncoding,
                )
            })?;

            if line.starts_with(COORDINATE_RECORD) {
                if records.connectivity_records > 0 {
                    return Err(PdbError::malformed(
                        line_num,
                        line,
                        PdbParseErrorKind::CoordinateAfterConnectivity,
                    ));
                }
                let atom = parse_coordinate_record(line)
                    .map_err(|kind| PdbError::malformed(line_num, line, kind))?;
                records.atoms.push(atom);
            } else if line.starts_with(CONNECTIVITY_RECORD) {
                let ordinal = records.connectivity_records;
                let atom_count = records.atoms.len();
                if ordinal >= atom_count {
                    return Err(PdbError::malformed(
                        line_num,
                        line,
                        PdbParseErrorKind::ExcessConnectivity {
                            ordinal: ordinal + 1,
                            atom_count,
                        },
                    ));
                }

                let (echo, partners) = parse_connectivity_record(line, atom_count)
                    .map_err(|kind| PdbError::malformed(line_num, line, kind))?;
                if echo != ordinal + 1 {
                    debug!(
                        "CONECT record #{} on line {} names atom {}; bonds are assigned to atom #{} by record order.",
                        ordinal + 1,
                        line_num,
                        echo,
                        ordinal + 1
                    );
                }

                records.atoms[ordinal].bonded_indices = partners;
                records.connectivity_records += 1;
            }
        }

        if records.atoms.is_empty() {
            return Err(PdbError::MissingRecord("HETATM records".into()));
        }
        if !records.is_fully_connected() {
            warn!(
                "Only {} CONECT record(s) for {} atoms; the remaining atoms have no bonds.",
                records.connectivity_records,
                records.atoms.len()
            );
        }

        debug!(
            "Parsed {} atoms and {} connectivity records.",
            records.atoms.len(),
            records.connectivity_records
        );
        Ok(records)
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn parse_coordinate_record(line: &str) -> Result<Atom, PdbParseErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_COORDINATE_FIELDS {
        return Err(PdbParseErrorKind::TooFewFields {
            found: fields.len(),
        });
    }

    let element: Element = fields[SYMBOL_FIELD].parse()?;

    let mut coords = [0.0f64; 3];
    for (slot, (axis, index)) in coords.iter_mut().zip(COORDINATE_FIELDS) {
        let value = fields[index];
        *slot = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PdbParseErrorKind::InvalidCoordinate {
                axis,
                value: value.to_string(),
            })?;
    }

    Ok(Atom::new(
        element,
        Point3::new(coords[0], coords[1], coords[2]),
    ))
}

/// Returns the echoed atom number and the zero-based partner indices.
fn parse_connectivity_record(
    line: &str,
    atom_count: usize,
) -> Result<(usize, Vec<usize>), PdbParseErrorKind> {
    let echo: usize = CONECT_ATOM_NUMBER.parse(line)?;

    let partners = CONECT_ATOM_NUMBER
        .remainder(line)?
        .split_whitespace()
        .map(|token| {
            let partner: usize =
                token
                    .parse()
                    .map_err(|_| PdbParseErrorKind::InvalidPartner {
                        value: token.to_string(),
                    })?;
            if partner == 0 || partner > atom_count {
                return Err(PdbParseErrorKind::PartnerOutOfRange {
                    partner,
                    atom_count,
                });
            }
            Ok(partner - 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((echo, partners))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(content: &str) -> Result<PdbRecords, PdbError> {
        PdbFile::read_from(&mut Cursor::new(content))
    }

    const METHANE: &str = "\
COMPND    METHANE
HETATM    1  C           1       0.000   0.000   0.000
HETATM    2  H           1       0.629   0.629   0.629
HETATM    3  H           1      -0.629  -0.629   0.629
HETATM    4  H           1      -0.629   0.629  -0.629
HETATM    5  H           1       0.629  -0.629  -0.629
CONECT    1    2    3    4    5
CONECT    2    1
CONECT    3    1
CONECT    4    1
CONECT    5    1
END
";

    #[test]
    fn reads_atoms_in_file_order_with_positions() {
        let records = read(METHANE).unwrap();
        assert_eq!(records.atoms.len(), 5);
        assert_eq!(records.connectivity_records, 5);
        assert!(records.is_fully_connected());

        assert_eq!(records.atoms[0].element, Element::C);
        assert_eq!(records.atoms[0].position, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(records.atoms[2].element, Element::H);
        assert_eq!(records.atoms[2].position, Point3::new(-0.629, -0.629, 0.629));
    }

    #[test]
    fn connectivity_is_assigned_by_record_order_and_converted_to_zero_based() {
        let records = read(METHANE).unwrap();
        assert_eq!(records.atoms[0].bonded_indices, vec![1, 2, 3, 4]);
        for h in 1..5 {
            assert_eq!(records.atoms[h].bonded_indices, vec![0]);
        }
    }

    #[test]
    fn echoed_atom_number_is_not_used_for_indexing() {
        let content = "\
HETATM    1  O           1       0.000   0.000   0.000
HETATM    2  H           1       0.960   0.000   0.000
HETATM    3  H           1      -0.240   0.930   0.000
CONECT   99    2    3
CONECT   42    1
CONECT    7    1
";
        let records = read(content).unwrap();
        assert_eq!(records.atoms[0].bonded_indices, vec![1, 2]);
        assert_eq!(records.atoms[1].bonded_indices, vec![0]);
        assert_eq!(records.atoms[2].bonded_indices, vec![0]);
    }

    #[test]
    fn upper_case_silicon_is_normalized() {
        let content = "HETATM    1 SI           1       1.000   2.000   3.000\n";
        let records = read(content).unwrap();
        assert_eq!(records.atoms[0].element, Element::Si);
    }

    #[test]
    fn missing_connectivity_records_leave_atoms_unbonded() {
        let content = "\
HETATM    1  H           1       0.000   0.000   0.000
HETATM    2  H           1       0.740   0.000   0.000
CONECT    1    2
";
        let records = read(content).unwrap();
        assert_eq!(records.connectivity_records, 1);
        assert!(!records.is_fully_connected());
        assert_eq!(records.atoms[0].bonded_indices, vec![1]);
        assert!(records.atoms[1].bonded_indices.is_empty());
    }

    #[test]
    fn duplicate_and_self_partners_are_kept_verbatim() {
        let content = "\
HETATM    1  C           1       0.000   0.000   0.000
HETATM    2  C           1       1.000   0.000   0.000
CONECT    1    2    2    1
";
        let records = read(content).unwrap();
        assert_eq!(records.atoms[0].bonded_indices, vec![1, 1, 0]);
    }

    #[test]
    fn non_numeric_coordinate_is_malformed() {
        let content = "HETATM    1  C           1       0.000   abc     0.000\n";
        let err = read(content).unwrap_err();
        match err {
            PdbError::MalformedRecord {
                line,
                content,
                kind: PdbParseErrorKind::InvalidCoordinate { axis, value },
            } => {
                assert_eq!(line, 1);
                assert!(content.starts_with("HETATM"));
                assert_eq!(axis, 'y');
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_coordinates_are_malformed() {
        for (row, axis, value) in [
            ("NaN     0.000   0.000", 'x', "NaN"),
            ("0.000   inf     0.000", 'y', "inf"),
            ("0.000   0.000   -infinity", 'z', "-infinity"),
        ] {
            let content = format!("HETATM    1  H           1       {row}\n");
            match read(&content).unwrap_err() {
                PdbError::MalformedRecord {
                    kind: PdbParseErrorKind::InvalidCoordinate { axis: a, value: v },
                    ..
                } => {
                    assert_eq!(a, axis);
                    assert_eq!(v, value);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn non_utf8_bytes_outside_records_are_ignored() {
        let mut content = b"REMARK  caf\xe9 au lait\r\n".to_vec();
        content.extend_from_slice(METHANE.as_bytes());
        let records = PdbFile::read_from(&mut Cursor::new(content)).unwrap();
        assert_eq!(records.atoms.len(), 5);
        assert!(records.is_fully_connected());
    }

    #[test]
    fn non_utf8_record_reports_its_line() {
        let (head, tail) = METHANE.split_at(METHANE.find("CONECT").unwrap());
        let mut content = head.as_bytes().to_vec();
        content.extend_from_slice(b"HETATM    6  H    \xe9\n");
        content.extend_from_slice(tail.as_bytes());
        match PdbFile::read_from(&mut Cursor::new(content)).unwrap_err() {
            PdbError::MalformedRecord {
                line,
                content,
                kind: PdbParseErrorKind::InvalidEncoding,
            } => {
                assert_eq!(line, 7);
                assert!(content.starts_with("HETATM    6"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let records = read(&METHANE.replace('\n', "\r\n")).unwrap();
        assert_eq!(records.atoms[0].bonded_indices, vec![1, 2, 3, 4]);
        assert_eq!(records.atoms[4].position, Point3::new(0.629, -0.629, -0.629));
    }

    #[test]
    fn truncated_coordinate_record_is_malformed() {
        let err = read("HETATM    1  C           1       0.000\n").unwrap_err();
        assert!(matches!(
            err,
            PdbError::MalformedRecord {
                kind: PdbParseErrorKind::TooFewFields { found: 5 },
                ..
            }
        ));
    }

    #[test]
    fn unknown_element_is_malformed() {
        let err = read("HETATM    1 CL           1       0.000   0.000   0.000\n").unwrap_err();
        assert!(matches!(
            err,
            PdbError::MalformedRecord {
                kind: PdbParseErrorKind::UnknownElement(_),
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_partner_is_malformed() {
        let content = "\
HETATM    1  H           1       0.000   0.000   0.000
HETATM    2  H           1       0.740   0.000   0.000
CONECT    1    x
";
        let err = read(content).unwrap_err();
        match err {
            PdbError::MalformedRecord { line, kind, .. } => {
                assert_eq!(line, 3);
                assert!(
                    matches!(kind, PdbParseErrorKind::InvalidPartner { ref value } if value == "x")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_connectivity_record_fails_fast() {
        let content = "\
HETATM    1  H           1       0.000   0.000   0.000
CONECT  1
";
        let err = read(content).unwrap_err();
        assert!(matches!(
            err,
            PdbError::MalformedRecord {
                kind: PdbParseErrorKind::Column(ColumnError::LineTooShort { .. }),
                ..
            }
        ));
    }

    #[test]
    fn partner_out_of_range_is_malformed() {
        let content = "\
HETATM    1  H           1       0.000   0.000   0.000
HETATM    2  H           1       0.740   0.000   0.000
CONECT    1    3
";
        let err = read(content).unwrap_err();
        assert!(matches!(
            err,
            PdbError::MalformedRecord {
                kind: PdbParseErrorKind::PartnerOutOfRange {
                    partner: 3,
                    atom_count: 2
                },
                ..
            }
        ));

        let zero = "\
HETATM    1  H           1       0.000   0.000   0.000
CONECT    1    0
";
        assert!(matches!(
            read(zero).unwrap_err(),
            PdbError::MalformedRecord {
                kind: PdbParseErrorKind::PartnerOutOfRange { partner: 0, .. },
                ..
            }
        ));
    }

    #[test]
    fn more_connectivity_records_than_atoms_is_malformed() {
        let content = "\
HETATM    1  H           1       0.000   0.000   0.000
CONECT    1
CONECT    2
";
        let err = read(content).unwrap_err();
        assert!(matches!(
            err,
            PdbError::MalformedRecord {
                line: 3,
                kind: PdbParseErrorKind::ExcessConnectivity {
                    ordinal: 2,
                    atom_count: 1
                },
                ..
            }
        ));
    }

    #[test]
    fn coordinate_record_after_connectivity_block_is_malformed() {
        let content = "\
HETATM    1  H           1       0.000   0.000   0.000
CONECT    1
HETATM    2  H           1       0.740   0.000   0.000
";
        let err = read(content).unwrap_err();
        assert!(matches!(
            err,
            PdbError::MalformedRecord {
                line: 3,
                kind: PdbParseErrorKind::CoordinateAfterConnectivity,
                ..
            }
        ));
    }

    #[test]
    fn input_without_coordinate_records_is_rejected() {
        let err = read("REMARK nothing here\nEND\n").unwrap_err();
        assert!(matches!(err, PdbError::MissingRecord(_)));
    }

    #[test]
    fn read_from_path_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("methane.pdb");
        std::fs::write(&path, METHANE).unwrap();

        let records = PdbFile::read_from_path(&path).unwrap();
        assert_eq!(records.atoms.len(), 5);
    }

    #[test]
    fn read_from_missing_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdbFile::read_from_path(dir.path().join("absent.pdb")).unwrap_err();
        assert!(matches!(err, PdbError::Io(_)));
    }
}
