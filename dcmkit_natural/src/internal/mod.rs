pub mod denaturalize;
pub mod natural_keys;
pub mod naturalize;
