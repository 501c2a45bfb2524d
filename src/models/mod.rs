// load based on dependency order: currency is a leaf, money sits on top of it.
pub mod currency;
pub mod money;
