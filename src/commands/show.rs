use clap::Parser;
use std::fs;

use crate::error::ReformError;
use crate::models::Tile;

/// Print a one-line summary per tile of a cleaned board file.
#[derive(Parser)]
pub struct ShowCommand {
  // Cleaned board JSON
  #[clap(default_value = "property_data_cleaned.json")]
  input: String,
}

impl ShowCommand {
  pub fn execute(&self) -> Result<(), ReformError> {
    let text = fs::read_to_string(&self.input)?;
    let tiles: Vec<Tile> = serde_json::from_str(&text)?;
    for tile in tiles.iter() {
      println!("{}", summarize(tile));
    }
    Ok(())
  }
}

fn summarize(tile: &Tile) -> String {
  let pos = tile.position.map_or(String::from("--"), |p| format!("{:02}", p));
  let mortgage = tile.mortgage.map_or(String::from("-"), |m| m.to_string());
  match tile.kind.as_str() {
    "property" => format!(
      "{}  property  {:<10}  mortgage {}",
      pos,
      tile.color.as_deref().unwrap_or("-"),
      mortgage
    ),
    kind => format!("{}  {:<8}  {:<10}  mortgage {}", pos, kind, "", mortgage),
  }
}
