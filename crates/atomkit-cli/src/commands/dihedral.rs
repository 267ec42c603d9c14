use super::load_atoms;
use crate::cli::DihedralArgs;
use crate::error::{CliError, Result};
use atomkit::core::utils::geometry::dihedral_angle;
use atomkit::engine::query::find_by_id;
use std::io::Write;
use tracing::debug;

pub fn run(args: DihedralArgs, out: &mut impl Write) -> Result<()> {
    let [id1, id2, id3, id4] = args.atoms[..] else {
        return Err(CliError::Argument(format!(
            "a dihedral needs exactly four atom ids, got {}",
            args.atoms.len()
        )));
    };
    let (atoms, _) = load_atoms(&args.input)?;

    let angle = dihedral_angle(
        find_by_id(id1, &atoms)?,
        find_by_id(id2, &atoms)?,
        find_by_id(id3, &atoms)?,
        find_by_id(id4, &atoms)?,
    )?;
    debug!(atoms = ?args.atoms, angle, "Computed dihedral angle.");
    writeln!(out, "{:.6}", angle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output_of, write_fragment};
    use atomkit::core::error::ChemError;

    fn dihedral(path: std::path::PathBuf, atoms: Vec<i32>) -> Result<String> {
        let mut out = Vec::new();
        run(DihedralArgs { input: path, atoms }, &mut out)?;
        Ok(output_of(out))
    }

    #[test]
    fn planar_cis_arrangement_prints_zero() {
        let (_dir, path) = write_fragment();
        let text = dihedral(path, vec![4, 1, 2, 3]).unwrap();
        let angle: f64 = text.trim().parse().unwrap();
        assert!(angle.abs() < 1e-5, "got {angle}");
    }

    #[test]
    fn planar_trans_arrangement_prints_180() {
        let (_dir, path) = write_fragment();
        let text = dihedral(path, vec![1, 2, 3, 6]).unwrap();
        let angle: f64 = text.trim().parse().unwrap();
        assert!((angle - 180.0).abs() < 1e-5, "got {angle}");
    }

    #[test]
    fn lifted_cis_arrangement_prints_unsigned_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lifted.xyz");
        std::fs::write(&path, "4\nlifted\nH 0 1 1\nC 0 0 1\nC 1.5 0 1\nH 1.5 1 1\n").unwrap();
        let text = dihedral(path, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(text.trim(), "0.000000");
    }

    #[test]
    fn wrong_number_of_ids_is_argument_error() {
        let (_dir, path) = write_fragment();
        let result = dihedral(path, vec![1, 2, 3]);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn collinear_atoms_are_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.xyz");
        std::fs::write(&path, "4\nline\nC 0 0 0\nC 1 0 0\nC 2 0 0\nC 3 0 0\n").unwrap();
        let result = dihedral(path, vec![1, 2, 3, 4]);
        assert!(matches!(
            result,
            Err(CliError::Chem(ChemError::InvalidArgument(_)))
        ));
    }
}
