use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use atomkit::core::chem::element::Element;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "atomkit - distances, bonds, dihedral angles, and element data for XYZ structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a geometry configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the bond length (Angstroms) used for bond detection.
    #[arg(short, long, global = true, value_name = "FLOAT")]
    pub bond_length: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the distance between two atoms.
    Distance(DistanceArgs),
    /// Print the dihedral angle defined by four atoms.
    Dihedral(DihedralArgs),
    /// List atoms of one element bonded to a target atom.
    Bonds(BondsArgs),
    /// Shift every atom so that a given point becomes the origin.
    Center(CenterArgs),
    /// Show symbol, name, atomic number, and mass of an element.
    Element(ElementArgs),
}

/// Arguments for the `distance` subcommand.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// Path to the input XYZ file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
    /// Id of the first atom (1-based position in the file).
    pub first: i32,
    /// Id of the second atom.
    pub second: i32,
}

/// Arguments for the `dihedral` subcommand.
#[derive(Args, Debug)]
pub struct DihedralArgs {
    /// Path to the input XYZ file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
    /// Ids of the four atoms, in order along the chain.
    #[arg(num_args = 4, required = true, value_name = "ID")]
    pub atoms: Vec<i32>,
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Path to the input XYZ file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
    /// Id of the target atom.
    pub atom: i32,
    /// Element to search for (symbol, name, or atomic number).
    #[arg(short, long, required = true, value_name = "ELEMENT")]
    pub element: Element,
    /// Require exactly one bonded atom and print its bond distance.
    #[arg(long)]
    pub single: bool,
}

/// Arguments for the `center` subcommand.
#[derive(Args, Debug)]
pub struct CenterArgs {
    /// Path to the input XYZ file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the centered XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub origin: CenterOrigin,
}

/// A group selecting the point that becomes the new origin.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct CenterOrigin {
    /// Explicit origin as comma-separated coordinates, e.g. `1.0,-2.5,0`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub origin: Option<Vec<f64>>,
    /// Use the position of the atom with this id as the origin.
    #[arg(long, value_name = "ID")]
    pub on_atom: Option<i32>,
}

/// Arguments for the `element` subcommand.
#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Symbol, English name, or atomic number.
    pub query: String,
}
