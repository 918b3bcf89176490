//! File output for sampled curves.

pub mod export;
