use crate::error::Result;
use atomkit::core::chem::element::Element;
use std::io::Write;

pub fn run(query: &str, out: &mut impl Write) -> Result<()> {
    let element: Element = query.parse()?;
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        element.symbol(),
        element.name(),
        element.atomic_number(),
        element.atomic_mass()
    )?;
    Ok(())
}
