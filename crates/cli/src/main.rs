use anyhow::Context;

use boutique_cli::{CliConfig, Session, StdConsole};
use boutique_inventory::sample::sample_catalog;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env()?;
    boutique_observability::init(&config.log);

    let catalog = sample_catalog().context("failed to build the sample catalog")?;
    let console = StdConsole::stdio(config.clear_screen);

    Session::new(catalog, console, &config)
        .run()
        .context("console I/O failed")?;

    Ok(())
}
