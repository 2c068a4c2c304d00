use anyhow::Result;
use clap::Args;
use orthoview_core::consts::DEFAULT_VOLUME_URL;

use super::load_source;

#[derive(Args)]
pub struct InfoArgs {
    /// Volume URL or path (.nii / .nii.gz)
    #[arg(default_value = DEFAULT_VOLUME_URL)]
    pub source: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let loaded = load_source(&args.source)?;
    crate::summary::print_volume_summary(&args.source, &loaded);
    Ok(())
}
