//! Inspect command implementation.

use std::fs;
use std::path::Path;

use lodcast_core::{Decoder, LodTile};

use crate::error::Result;

/// Run the inspect command - decodes a blob and prints a summary.
pub fn run(input: &Path) -> Result<()> {
    let bytes = fs::read(input)?;
    let tile = LodTile::decode(&bytes)?;
    let offsets = tile.offsets().as_slice();

    println!("{}", input.display());
    println!("  points:     {}", tile.points().len());
    println!("  data bytes: {}", tile.points().byte_len());
    println!("  partitions: {}", offsets.len());
    if let (Some(first), Some(last)) = (offsets.first(), offsets.last()) {
        println!("  offsets:    {first}..={last}");
    }
    Ok(())
}
