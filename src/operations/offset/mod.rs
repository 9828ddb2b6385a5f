mod chain_offset_2d;

pub use chain_offset_2d::ChainOffset2D;
