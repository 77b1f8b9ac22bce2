pub mod lookup;
pub mod sprite;
