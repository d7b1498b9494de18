//! holidays-storage - Storage library for holidays-kr
//!
//! This crate provides filesystem implementations for loading preset
//! datasets and publishing export output.

mod dataset_store;
mod output_store;

pub use dataset_store::FileSystemDatasets;
pub use output_store::FileSystemOutput;
