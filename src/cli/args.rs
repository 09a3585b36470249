use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate Azure network security group Terraform from the Zscaler address feed.",
    long_about = None
)]
pub struct Args {
    /// Terraform name of the resource group the security group belongs to
    #[arg(long, env = "ZSCALER_RESOURCE_GROUP", default_value = "whitelist-dev")]
    pub resource_group: String,

    /// Terraform name of the network security group resource
    #[arg(long, env = "ZSCALER_NSG_NAME", default_value = "whitelist-dev")]
    pub nsg_name: String,

    /// Azure name of the network security group
    #[arg(long, env = "ZSCALER_NSG_DISPLAY_NAME", default_value = "zpa-whitelist-dev")]
    pub nsg_display_name: String,

    /// Write the generated Terraform to this file
    #[arg(short = 'o', long, default_value = "output.tf")]
    pub output: PathBuf,

    /// Zscaler address feed URL [default: ZSCALER_ADDRESS_TOOL_URL or the ZPA feed]
    #[arg(long)]
    pub url: Option<String>,

    /// Address feed request timeout in milliseconds
    /// [default: ZSCALER_ADDRESS_TOOL_TIMEOUT or 30000]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Read the address feed from a local JSON file instead of the URL
    #[arg(long, conflicts_with = "url")]
    pub json_file: Option<PathBuf>,

    /// Print a summary table of the address feed blocks
    #[arg(long)]
    pub summary: bool,

    /// Save the generated security rules to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}
