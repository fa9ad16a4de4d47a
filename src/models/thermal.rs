//! Thermal systems models.

pub mod pipe_wall;
