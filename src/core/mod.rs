// Copyright @yucwang 2021

pub mod emitter;
pub mod geometry;
pub mod integrator;
pub mod medium;
pub mod phase;
pub mod rng;
pub mod sampler;
pub mod scene;
pub mod sensor;
pub mod settings;
pub mod settings_loader;
pub mod tracking;
