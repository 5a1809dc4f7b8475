use softcraft_core::{CraftError, Structure, Vec2};

/// Result of a nearest-particle lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub index: usize,
    pub position: Vec2,
    pub distance: f32,
    /// Vector from the query point to the particle
    pub offset: Vec2,
}

/// Find the particle closest to `point`. Ties go to the lowest index.
pub fn nearest_particle(structure: &Structure, point: Vec2) -> Result<Nearest, CraftError> {
    let mut best: Option<Nearest> = None;

    for (index, p) in structure.particles().iter().enumerate() {
        let offset = p.position - point;
        let distance = offset.length();
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Nearest {
                index,
                position: p.position,
                distance,
                offset,
            });
        }
    }

    best.ok_or(CraftError::EmptyStructure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Structure {
        let mut s = Structure::new();
        for x in [0.0, 2.0, 4.0] {
            s.add_particle(x, 0.0, 1.0).unwrap();
        }
        s
    }

    #[test]
    fn test_finds_closest() {
        let n = nearest_particle(&line(), Vec2::new(3.6, 0.3)).unwrap();
        assert_eq!(n.index, 2);
        assert_eq!(n.position, Vec2::new(4.0, 0.0));
        assert!((n.distance - 0.5).abs() < 1e-5);
        assert!((n.offset.x - 0.4).abs() < 1e-5);
        assert!((n.offset.y + 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let n = nearest_particle(&line(), Vec2::new(1.0, 5.0)).unwrap();
        assert_eq!(n.index, 0);
        let n = nearest_particle(&line(), Vec2::new(3.0, -1.0)).unwrap();
        assert_eq!(n.index, 1);
    }

    #[test]
    fn test_empty_structure() {
        assert_eq!(
            nearest_particle(&Structure::new(), Vec2::ZERO),
            Err(CraftError::EmptyStructure)
        );
    }
}
