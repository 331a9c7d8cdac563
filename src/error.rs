use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReformError {
  #[error("board has {0} tiles, expected at least 40")]
  ShortBoard(usize),

  #[error("tile {kind:?} at position {position:?} has no cost field")]
  MissingCost { kind: String, position: Option<usize> },

  #[error("unable to parse cost {raw} as an integer")]
  BadCost { raw: String },

  #[error("buyable {kind:?} tile lies beyond the 40 tagged board positions")]
  UntaggedTile { kind: String },

  // borrowed-mode mortgages need a property cost to halve; a board whose
  // first buyable tile is a utility or railroad has nothing to borrow
  #[error("no property cost available to borrow for {kind:?} at position {position:?}")]
  NoBorrowedCost { kind: String, position: Option<usize> },

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
