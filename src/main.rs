use anyhow::{Context, Result};
use double_pendulum::app::{Visualizer, WindowSettings};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let visualizer = Visualizer::new(WindowSettings::default())
        .context("failed to initialise the pendulum window")?;
    visualizer.run().context("pendulum frame loop aborted")?;
    Ok(())
}
