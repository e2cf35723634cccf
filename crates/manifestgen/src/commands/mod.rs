pub mod check;
pub mod common;
pub mod generate;
pub mod print;
pub mod show_config;

pub use check::Check;
pub use common::GenerateOptions;
pub use generate::Generate;
pub use print::Print;
pub use show_config::ShowConfig;
