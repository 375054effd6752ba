// Copyright @yucwang 2026

pub mod aerosol;
pub mod atmosphere;
pub mod homogeneous_medium;
pub mod molecular;
pub mod tables;
