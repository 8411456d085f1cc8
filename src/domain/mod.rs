// Domain layer: the measurement record and the category it sorts into.

pub mod model;
