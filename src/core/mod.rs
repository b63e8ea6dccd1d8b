pub mod analyze;
pub mod engine;
pub mod error;
pub mod fasta;
pub mod io;
pub mod metrics;
pub mod model;
pub mod nx;
pub mod summary;
pub mod timing;
