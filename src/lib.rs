pub mod constants;
pub mod error;
pub mod imagine;
pub mod print_help;
pub mod task;
pub mod utils;
pub mod wait;
