pub mod evaluate;
pub mod orient;
pub mod scale;
pub mod species;
pub mod sweep;
