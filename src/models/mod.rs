pub mod tile;

pub use tile::Tile;
