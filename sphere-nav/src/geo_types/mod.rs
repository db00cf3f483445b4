//! Integration with the [`geo_types`] crate.

mod point;
