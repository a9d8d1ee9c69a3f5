pub mod board;
pub mod game;
pub mod piece;
pub mod player;
pub mod prelude;
