pub mod app;
pub mod cli_args;
pub mod view_state;

pub use cli_args::CliArgs;
pub use view_state::MapViewState;
