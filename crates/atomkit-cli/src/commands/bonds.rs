use super::load_atoms;
use crate::cli::BondsArgs;
use crate::error::Result;
use atomkit::core::models::atom::Atom;
use atomkit::core::utils::geometry::distance;
use atomkit::engine::bonds::BondFinder;
use atomkit::engine::config::GeometryConfig;
use atomkit::engine::query::find_by_id;
use std::io::Write;
use tracing::info;

pub fn run(args: BondsArgs, geometry: &GeometryConfig, out: &mut impl Write) -> Result<()> {
    let (atoms, _) = load_atoms(&args.input)?;
    let target = find_by_id(args.atom, &atoms)?.clone();
    let candidates: Vec<Atom> = atoms.into_iter().filter(|a| a.id != target.id).collect();
    let finder = BondFinder::from_config(geometry);

    if args.single {
        let bonded = finder.find_single_bond_atom(&target, &candidates, args.element)?;
        writeln!(
            out,
            "{}\t{}\t{:.6}",
            bonded.id,
            bonded.element,
            distance(&target, bonded)
        )?;
        return Ok(());
    }

    let bonded = finder.find_bond_atoms(&target, &candidates, args.element);
    info!(
        "Found {} {} atom(s) within {:.3} A of atom {}.",
        bonded.len(),
        args.element,
        finder.bond_length(),
        target.id
    );
    for atom in bonded {
        writeln!(
            out,
            "{}\t{}\t{:.6}",
            atom.id,
            atom.element,
            distance(&target, atom)
        )?;
    }
    Ok(())
}
