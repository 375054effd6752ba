// Copyright @yucwang 2026

pub mod path;
pub mod transmittance;
