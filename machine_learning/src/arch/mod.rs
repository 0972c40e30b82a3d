mod linear;

pub use linear::WeightModel;
