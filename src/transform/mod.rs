use log::debug;

use crate::error::ReformError;
use crate::models::Tile;

pub const BOARD_SIZE: usize = 40;

/// How utility and railroad mortgages are computed.
///
/// The legacy cleanup script this tool replaces reused the loop variable of
/// its property pass when it halved utility and railroad costs, so every one
/// of them got half the cost of the *last property on the board* instead of
/// its own. `Borrowed` replicates that byte for byte, which matters when the
/// cleaned file has to match the shipped dataset; `OwnCost` is the corrected
/// per-tile math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MortgageMode {
  Borrowed,
  OwnCost,
}

/// Color group for a property position, per the fixed board layout. Positions
/// outside the eight groups return None and keep whatever color the input had.
pub fn color_for(position: usize) -> Option<&'static str> {
  match position {
    1 | 3 => Some("PURPLE"),
    6 | 8 | 9 => Some("LIGHT_BLUE"),
    11 | 13 | 14 => Some("PINK"),
    16 | 18 | 19 => Some("ORANGE"),
    21 | 23 | 24 => Some("RED"),
    26 | 27 | 29 => Some("YELLOW"),
    31 | 32 | 34 => Some("GREEN"),
    37 | 39 => Some("DARK_BLUE"),
    _ => None,
  }
}

/// Run the full reform pipeline over a raw board: tag positions, enrich
/// buyable tiles, drop everything else, sort by position, strip `group`.
///
/// Pure: takes the input sequence by value and returns a new one. A buyable
/// tile past index 39 never got a position and is rejected; every output
/// tile carries one.
pub fn reform(tiles: Vec<Tile>, mode: MortgageMode) -> Result<Vec<Tile>, ReformError> {
  if tiles.len() < BOARD_SIZE {
    return Err(ReformError::ShortBoard(tiles.len()));
  }
  let mut tiles = tiles;

  // tag every tile with a position from 0-39
  for (i, tile) in tiles.iter_mut().take(BOARD_SIZE).enumerate() {
    tile.position = Some(i);
  }

  let mut props: Vec<Tile> = Vec::new();
  let mut utils: Vec<Tile> = Vec::new();
  let mut rails: Vec<Tile> = Vec::new();
  for tile in tiles.iter() {
    match tile.kind.as_str() {
      "property" => props.push(tile.clone()),
      "utility" => utils.push(tile.clone()),
      "railroad" => rails.push(tile.clone()),
      _ => {}
    }
  }
  debug!("{} properties, {} utilities, {} railroads", props.len(), utils.len(), rails.len());

  // add mortgage value, fix color field
  let mut last_property_cost: Option<i64> = None;
  for p in props.iter_mut() {
    let pos = p.position.ok_or_else(|| ReformError::UntaggedTile { kind: p.kind.clone() })?;
    let cost = p.cost_value()?;
    p.mortgage = Some(cost as f64 / 2.0);
    last_property_cost = Some(cost);
    if let Some(color) = color_for(pos) {
      p.color = Some(color.to_string());
    }
  }

  for t in utils.iter_mut().chain(rails.iter_mut()) {
    if t.position.is_none() {
      return Err(ReformError::UntaggedTile { kind: t.kind.clone() });
    }
    let cost = match mode {
      MortgageMode::Borrowed => {
        last_property_cost.ok_or_else(|| ReformError::NoBorrowedCost {
          kind: t.kind.clone(),
          position: t.position,
        })?
      }
      MortgageMode::OwnCost => t.cost_value()?,
    };
    t.mortgage = Some(cost as f64 / 2.0);
  }

  // merge all buyable tiles together and order them by board position
  let mut merged = props;
  merged.append(&mut utils);
  merged.append(&mut rails);
  merged.sort_by_key(|t| t.position.unwrap_or(usize::MAX));

  // group is input-only; dropping an absent group is a no-op
  for tile in merged.iter_mut() {
    tile.group = None;
  }

  Ok(merged)
}
