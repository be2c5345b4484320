mod unit_get;

pub use unit_get::unit_get;
