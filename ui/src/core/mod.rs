//! Platform-agnostic building blocks: the synthetic analyzer, matrix
//! perturbation, recommendation rules, dataset intake and persistence.

pub mod analyzer;
pub mod dataset;
pub mod error;
pub mod format;
pub mod perturb;
pub mod platform;
pub mod recommend;
pub mod storage;
pub mod theme;
pub mod timing;
