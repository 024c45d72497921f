//! Command implementations for OxiCrc CLI.

pub mod bench;
pub mod combine;
pub mod info;
pub mod list;
pub mod model;
pub mod sum;

pub use bench::{BenchOptions, cmd_bench};
pub use combine::cmd_combine;
pub use info::cmd_info;
pub use list::cmd_list;
pub use model::ModelArgs;
pub use sum::{SumMode, SumOptions, cmd_sum};
pub use test::cmd_test;
