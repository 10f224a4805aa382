use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ros2model::{ModelGenerator, interface::package_share_directory};

use super::write_model;

#[derive(Args)]
pub struct InterfacePackageArgs {
    /// Name of the package containing the interfaces
    interface_package_name: String,

    /// Installed share directory of the package (contains msg/, srv/, action/);
    /// looked up on AMENT_PREFIX_PATH when omitted
    #[arg(short, long)]
    share_dir: Option<PathBuf>,

    /// Output file for the generated model
    #[arg(short, long)]
    output: PathBuf,
}

impl InterfacePackageArgs {
    pub fn run(self) -> Result<()> {
        let share_dir = match self.share_dir {
            Some(dir) => dir,
            None => package_share_directory(&self.interface_package_name)?,
        };
        let text =
            ModelGenerator::new().interface_package(&share_dir, &self.interface_package_name)?;
        write_model(&self.output, &text)
    }
}
