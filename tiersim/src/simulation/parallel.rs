//! Parallel-for over body indices
//!
//! Every hot loop in the engine writes exactly one output slot per body and
//! only reads shared, immutable data, so it can be handed to any backend.
//! Each call returns only once every body has been processed, which is the
//! barrier between simulation stages.

use rayon::prelude::*;
use serde::Deserialize;

use super::states::NVec2;

/// Backend used to run per-body kernels
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parallelism {
    #[serde(rename = "serial")] // single thread, in index order
    Serial,

    #[default]
    #[serde(rename = "rayon")] // rayon global thread pool
    Rayon,
}

impl Parallelism {
    /// Run `kernel(i, &mut out[i])` for every body
    pub fn for_each_body<F>(self, out: &mut [NVec2], kernel: F)
    where
        F: Fn(usize, &mut NVec2) + Send + Sync,
    {
        match self {
            Parallelism::Serial => out
                .iter_mut()
                .enumerate()
                .for_each(|(i, o)| kernel(i, o)),
            Parallelism::Rayon => out
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, o)| kernel(i, o)),
        }
    }

    /// Fallible variant of [`Parallelism::for_each_body`]
    /// With rayon, which error is reported when several bodies fail is unspecified
    pub fn try_for_each_body<F, E>(self, out: &mut [NVec2], kernel: F) -> Result<(), E>
    where
        F: Fn(usize, &mut NVec2) -> Result<(), E> + Send + Sync,
        E: Send,
    {
        match self {
            Parallelism::Serial => out
                .iter_mut()
                .enumerate()
                .try_for_each(|(i, o)| kernel(i, o)),
            Parallelism::Rayon => out
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(i, o)| kernel(i, o)),
        }
    }
}
