//! Line-oriented text format for structures.
//!
//! ```text
//! p <x> <y> <mass>                      particle, indexed in order of appearance
//! b <i1> <i2>                           beam between two particle indices
//! t <i1> <i2> <force> <controlled_by>   thruster, control mask as two hex digits
//! ```
//!
//! Lines starting with anything else are ignored. Beam rest lengths are not stored:
//! they are recomputed from the particle positions on load, so a reloaded structure
//! starts at equilibrium.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use softcraft_core::Structure;

use crate::StorageError;

/// Link records are resolved after every particle has been read
enum Link {
    Beam { i1: usize, i2: usize },
    Thruster { i1: usize, i2: usize, force: f32, controlled_by: u8 },
}

/// Parse a structure from its text form.
///
/// First pass counts records to size the collections, second pass parses them.
pub fn parse_structure(source: &str) -> Result<Structure, StorageError> {
    let (mut particle_count, mut beam_count, mut thruster_count) = (0, 0, 0);
    for line in source.lines() {
        match line.as_bytes().first() {
            Some(b'p') => particle_count += 1,
            Some(b'b') => beam_count += 1,
            Some(b't') => thruster_count += 1,
            _ => {}
        }
    }

    let mut structure = Structure::with_capacity(particle_count, beam_count, thruster_count);
    let mut links = Vec::with_capacity(beam_count + thruster_count);

    for (n, line) in source.lines().enumerate() {
        let line_no = n + 1;
        let Some(&kind) = line.as_bytes().first() else {
            continue;
        };
        let mut fields = line.split_whitespace();
        match kind {
            b'p' => {
                expect_tag(&mut fields, "p", line_no)?;
                let x = field(&mut fields, "x", line_no)?;
                let y = field(&mut fields, "y", line_no)?;
                let mass = field(&mut fields, "mass", line_no)?;
                structure
                    .add_particle(x, y, mass)
                    .map_err(|source| StorageError::Model { line: line_no, source })?;
            }
            b'b' => {
                expect_tag(&mut fields, "b", line_no)?;
                let i1 = field(&mut fields, "i1", line_no)?;
                let i2 = field(&mut fields, "i2", line_no)?;
                links.push((line_no, Link::Beam { i1, i2 }));
            }
            b't' => {
                expect_tag(&mut fields, "t", line_no)?;
                let i1 = field(&mut fields, "i1", line_no)?;
                let i2 = field(&mut fields, "i2", line_no)?;
                let force = field(&mut fields, "force", line_no)?;
                let mask = fields.next().ok_or_else(|| missing("controlled_by", line_no))?;
                let controlled_by = u8::from_str_radix(mask, 16).map_err(|e| StorageError::Parse {
                    line: line_no,
                    message: format!("invalid control mask {mask:?}: {e}"),
                })?;
                links.push((
                    line_no,
                    Link::Thruster {
                        i1,
                        i2,
                        force,
                        controlled_by,
                    },
                ));
            }
            _ => {}
        }
    }

    for (line_no, link) in links {
        let added = match link {
            Link::Beam { i1, i2 } => structure.add_beam(i1, i2),
            Link::Thruster {
                i1,
                i2,
                force,
                controlled_by,
            } => structure.add_thruster(i1, i2, force, controlled_by),
        };
        added.map_err(|source| StorageError::Model { line: line_no, source })?;
    }

    Ok(structure)
}

fn expect_tag(fields: &mut SplitWhitespace, tag: &str, line: usize) -> Result<(), StorageError> {
    match fields.next() {
        Some(t) if t == tag => Ok(()),
        other => Err(StorageError::Parse {
            line,
            message: format!("expected record tag {tag:?}, found {:?}", other.unwrap_or("")),
        }),
    }
}

fn field<T>(fields: &mut SplitWhitespace, name: &str, line: usize) -> Result<T, StorageError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let token = fields.next().ok_or_else(|| missing(name, line))?;
    token.parse().map_err(|e| StorageError::Parse {
        line,
        message: format!("invalid {name} {token:?}: {e}"),
    })
}

fn missing(name: &str, line: usize) -> StorageError {
    StorageError::Parse {
        line,
        message: format!("missing field {name}"),
    }
}

/// Write particles, intact beams and thrusters, in that order
pub fn write_structure(structure: &Structure, out: &mut impl Write) -> std::io::Result<()> {
    for p in structure.particles() {
        writeln!(out, "p {} {} {}", p.position.x, p.position.y, p.mass)?;
    }
    for b in structure.beams().iter().filter(|b| !b.is_broken()) {
        writeln!(out, "b {} {}", b.i1, b.i2)?;
    }
    for t in structure.thrusters() {
        writeln!(out, "t {} {} {} {:02x}", t.i1, t.i2, t.force, t.controlled_by)?;
    }
    Ok(())
}

/// Read a structure file. The file is read completely before anything is built.
pub fn load_structure(path: &Path) -> Result<Structure, StorageError> {
    let source = fs::read_to_string(path)?;
    let structure = parse_structure(&source)?;
    log::info!(
        "loaded {}: {} particles, {} beams, {} thrusters",
        path.display(),
        structure.particle_count(),
        structure.beam_count(),
        structure.thruster_count()
    );
    Ok(structure)
}

/// Save a structure, overwriting `path`
pub fn save_structure(structure: &Structure, path: &Path) -> Result<(), StorageError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_structure(structure, &mut out)?;
    out.flush()?;
    log::info!("saved structure to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use softcraft_core::{CraftError, Vec2, BEAM_BROKEN, THRUSTER_BACK, THRUSTER_RIGHT};
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("softcraft-{}.txt", Uuid::new_v4()))
    }

    fn sample() -> Structure {
        let mut s = Structure::new();
        s.add_particle(0.1, -2.75, 1.0).unwrap();
        s.add_particle(1.0 / 3.0, 0.5, 2.5).unwrap();
        s.add_particle(-4.0, 1e-7, 0.25).unwrap();
        s.add_beam(0, 1).unwrap();
        s.add_beam(2, 1).unwrap();
        s.add_thruster(0, 2, 12.5, THRUSTER_BACK | THRUSTER_RIGHT).unwrap();
        s
    }

    #[test]
    fn test_round_trip_through_file() {
        let original = sample();
        let path = temp_path();
        save_structure(&original, &path).unwrap();
        let loaded = load_structure(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_reload_discards_deformation() {
        let mut s = sample();
        s.particles_mut()[1].position = Vec2::new(2.0, 2.0);
        let (_, beams, _) = s.parts_mut();
        beams[0].rest_length = 0.01;

        let mut text = Vec::new();
        write_structure(&s, &mut text).unwrap();
        let loaded = parse_structure(std::str::from_utf8(&text).unwrap()).unwrap();

        for b in loaded.beams() {
            let expected = loaded.particles()[b.i1]
                .position
                .distance(loaded.particles()[b.i2].position);
            assert_eq!(b.rest_length, expected);
        }
    }

    #[test]
    fn test_control_mask_written_as_hex() {
        let mut text = Vec::new();
        write_structure(&sample(), &mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.lines().any(|l| l == "t 0 2 12.5 09"));
        assert_eq!(text.lines().filter(|l| l.starts_with('p')).count(), 3);
    }

    #[test]
    fn test_broken_beams_not_saved() {
        let mut s = sample();
        let (_, beams, _) = s.parts_mut();
        beams[0].flags |= BEAM_BROKEN;
        let mut text = Vec::new();
        write_structure(&s, &mut text).unwrap();
        let loaded = parse_structure(std::str::from_utf8(&text).unwrap()).unwrap();
        assert_eq!(loaded.beam_count(), 1);
        assert_eq!((loaded.beams()[0].i1, loaded.beams()[0].i2), (2, 1));
    }

    #[test]
    fn test_links_may_precede_particles() {
        let source = "# hull\nb 0 1\nt 1 0 3.5 0c\np 0 0 1\n\nx ignored\np 2 0 1\n";
        let s = parse_structure(source).unwrap();
        assert_eq!(s.particle_count(), 2);
        assert_eq!(s.beam_count(), 1);
        assert!((s.beams()[0].rest_length - 2.0).abs() < 1e-6);
        assert_eq!(s.thrusters()[0].controlled_by, 0x0c);
    }

    #[test]
    fn test_malformed_record() {
        let err = parse_structure("p 0 0 1\np 1 oops 1\n").unwrap_err();
        assert!(matches!(err, StorageError::Parse { line: 2, .. }));
        let err = parse_structure("p 0 0 1\np 1 0 1\nt 0 1 2.0\n").unwrap_err();
        assert!(matches!(err, StorageError::Parse { line: 3, .. }));
        let err = parse_structure("p 0 0 1\np 1 0 1\nt 0 1 2.0 zz\n").unwrap_err();
        assert!(matches!(err, StorageError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_invalid_model_reports_line() {
        let err = parse_structure("p 0 0 1\nb 0 4\np 1 0 1\n").unwrap_err();
        match err {
            StorageError::Model { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, CraftError::InvalidIndex { index: 4, count: 2 });
            }
            other => panic!("unexpected error {other:?}"),
        }
        let err = parse_structure("p 0 0 -1\n").unwrap_err();
        assert!(matches!(
            err,
            StorageError::Model { line: 1, source: CraftError::NonPositiveMass(_) }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_structure(&temp_path()).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
