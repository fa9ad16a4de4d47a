//! Public models.
//!
//! Each model lives in its own module with an internal `core` submodule that
//! holds the computation and domain logic. The [`twine_core::Model`]
//! implementation is a thin adapter over that core.

pub mod thermal;
