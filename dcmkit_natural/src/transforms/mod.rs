pub mod p10_natural_transform;
