//! psagent: command-line agent for a host application's automation surface

use anyhow::Result;

fn main() -> Result<()> {
    psagent::cli::run()
}
