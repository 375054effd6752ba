// Copyright @yucwang 2026

pub mod equirectangular;
pub mod fisheye;
