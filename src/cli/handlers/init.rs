use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::config_io;

pub fn cmd_init(data_dir: &Path, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_io::init_config(data_dir, &args.owner, args.force)?;
    tracing::info!(path = %path.display(), "config written");
    println!("Initialized {}", path.display());
    Ok(())
}
