use super::load_atoms;
use crate::cli::DistanceArgs;
use crate::error::Result;
use atomkit::core::utils::geometry::distance;
use atomkit::engine::query::find_by_id;
use std::io::Write;
use tracing::debug;

pub fn run(args: DistanceArgs, out: &mut impl Write) -> Result<()> {
    let (atoms, _) = load_atoms(&args.input)?;
    let first = find_by_id(args.first, &atoms)?;
    let second = find_by_id(args.second, &atoms)?;

    let d = distance(first, second);
    debug!(first = first.id, second = second.id, distance = d, "Computed distance.");
    writeln!(out, "{:.6}", d)?;
    Ok(())
}
