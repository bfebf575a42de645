// Domain layer: typed profiles and recommendation records. No I/O here.

pub mod model;
