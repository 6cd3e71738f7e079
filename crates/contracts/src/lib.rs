//! Shared wire types between the True Sight shell and the inspection service.

pub mod domain;
pub mod live;
pub mod system;
