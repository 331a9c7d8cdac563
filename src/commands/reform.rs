use clap::Parser;
use log::info;
use std::fs;

use crate::error::ReformError;
use crate::models::Tile;
use crate::transform::{reform, MortgageMode};

/// Clean a raw board dump: tag positions, add mortgages, fix property
/// colors, drop unbuyable tiles, strip group ids.
#[derive(Parser)]
pub struct ReformCommand {
  // Raw board JSON
  #[clap(default_value = "property_data.json")]
  input: String,

  // Where to write the cleaned JSON
  #[clap(default_value = "property_data_cleaned.json")]
  output: String,

  /// Mortgage each utility and railroad from its own cost instead of
  /// borrowing the last property's, as the original pipeline did
  #[clap(long)]
  own_cost: bool,
}

impl ReformCommand {
  pub fn execute(&self) -> Result<(), ReformError> {
    let text = fs::read_to_string(&self.input)?;
    let tiles: Vec<Tile> = serde_json::from_str(&text)?;
    info!("loaded {} tiles from {}", tiles.len(), self.input);

    let mode = if self.own_cost { MortgageMode::OwnCost } else { MortgageMode::Borrowed };
    let cleaned = reform(tiles, mode)?;
    info!("kept {} buyable tiles", cleaned.len());

    fs::write(&self.output, serde_json::to_string(&cleaned)?)?;
    println!("done");
    Ok(())
  }
}
