mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{interface_package::InterfacePackageArgs, running_node::RunningNodeArgs};

#[derive(Parser)]
#[command(name = "ros2model", about = "Generate .ros2 models of ROS 2 interfaces and nodes")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Model every message, service and action of an interface package
    InterfacePackage(InterfacePackageArgs),
    /// Model running nodes from a graph snapshot
    RunningNode(RunningNodeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::InterfacePackage(args) => args.run(),
        Commands::RunningNode(args) => args.run(),
    }
}
