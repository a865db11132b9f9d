pub mod cli;
pub mod config;
pub mod dispatch;
pub mod docker_compose;
pub mod errors;
pub mod exitcode;
pub mod logging;
pub mod mode;
