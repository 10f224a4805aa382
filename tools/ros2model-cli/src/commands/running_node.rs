use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ros2model::{ModelGenerator, node::GraphSnapshot};

use super::write_model;

#[derive(Args)]
pub struct RunningNodeArgs {
    /// Graph snapshot (JSON) holding the introspection results
    #[arg(long)]
    snapshot: PathBuf,

    /// Node name to model
    #[arg(short, long, required_unless_present = "generate_all", conflicts_with = "generate_all")]
    node_name: Option<String>,

    /// Model every node in the snapshot
    #[arg(long = "generate-all")]
    generate_all: bool,

    /// Output file for a single node (default: <node_name>.ros2)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output directory for --generate-all
    #[arg(short = 'd', long, default_value = ".")]
    output_dir: PathBuf,

    /// Include hidden nodes, topics, services and actions
    #[arg(long = "include-hidden")]
    include_hidden: bool,

    /// Write parameter values into the model
    #[arg(long = "generate-value")]
    generate_value: bool,
}

impl RunningNodeArgs {
    pub fn run(self) -> Result<()> {
        let snapshot = GraphSnapshot::from_path(&self.snapshot)
            .with_context(|| format!("failed to load {}", self.snapshot.display()))?;
        let generator = ModelGenerator::builder()
            .with_parameter_values(self.generate_value)
            .with_hidden(self.include_hidden)
            .build();

        match &self.node_name {
            Some(node_name) if !self.generate_all => {
                let text = generator.node(&snapshot, node_name)?;
                let output = self.output.clone().unwrap_or_else(|| {
                    PathBuf::from(format!("{}.ros2", node_name.trim_start_matches('/')))
                });
                write_model(&output, &text)
            }
            _ => {
                for (short_name, text) in generator.all_nodes(&snapshot) {
                    let output = self.output_dir.join(format!("{short_name}.ros2"));
                    write_model(&output, &text)?;
                }
                Ok(())
            }
        }
    }
}
