// Copyright @yucwang 2026

pub mod directional;
pub mod distant_disk;
pub mod solar;
