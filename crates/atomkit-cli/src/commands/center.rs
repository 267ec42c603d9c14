use super::load_atoms;
use crate::cli::CenterArgs;
use crate::error::{CliError, Result};
use atomkit::core::io::traits::AtomFile;
use atomkit::core::io::xyz::XyzFile;
use atomkit::core::utils::geometry::{center, vector_for};
use atomkit::engine::query::find_by_id;
use tracing::info;

pub fn run(args: CenterArgs) -> Result<()> {
    let (mut atoms, metadata) = load_atoms(&args.input)?;

    let origin: Vec<f64> = match (args.origin.origin, args.origin.on_atom) {
        (Some(values), _) => values,
        (None, Some(id)) => vector_for(find_by_id(id, &atoms)?).iter().copied().collect(),
        (None, None) => {
            return Err(CliError::Argument(
                "either --origin or --on-atom is required".to_string(),
            ));
        }
    };

    for atom in atoms.iter_mut() {
        center(atom, &origin)?;
    }
    info!("Centered {} atoms on {:?}.", atoms.len(), origin);

    XyzFile::write_to_path(&atoms, &metadata, &args.output).map_err(|e| {
        CliError::FileWriting {
            path: args.output.clone(),
            source: e.into(),
        }
    })
}
