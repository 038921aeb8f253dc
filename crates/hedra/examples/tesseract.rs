//! Generates the two-cube plexiglass sculpture: two identical
//! six-panel cubes, the second offset into the first, with every
//! overlap trimmed out of the second cube's panels so the assembled
//! pair reads as one continuous figure.
//!
//! Usage: `cargo run --example tesseract [params.toml] [output.stl]`

use anyhow::{Context, Result};
use hedra::{assemble, cube_offset, cube_panels, write_stl, CutLedger, SculptureParams};
use hedra_kernel_math::Point3;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => SculptureParams::load(&path).with_context(|| format!("loading {path}"))?,
        None => SculptureParams::default(),
    };
    let output = args.next().unwrap_or_else(|| "tesseract.stl".to_string());

    let offset = cube_offset(&params);
    let cube1 = cube_panels(&params, Point3::origin(), "cube1")?;
    let cube2 = cube_panels(&params, Point3::origin() + offset, "cube2")?;

    let mut ledger = CutLedger::new();
    let pieces = assemble(&cube1, &cube2, &[], &mut ledger)?;

    for record in ledger.records() {
        println!("{record}");
    }
    for piece in &pieces {
        println!(
            "{}: volume {:.0} mm^3, {} cuts",
            piece.name(),
            piece.solid().volume(),
            piece.history().len()
        );
    }

    write_stl(&pieces, &output)?;
    println!("wrote {} pieces to {output}", pieces.len());
    Ok(())
}
