mod browse;
mod config;
mod ls;
mod show;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use ls::cmd_ls;
pub use show::cmd_show;

use crate::error::Result;

/// Print a JSON value to stdout, pretty-printed
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
