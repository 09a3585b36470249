use clap::Parser;
use log::error;
use std::process::ExitCode;
use zscaler_address_tool::{AddressFeed, ClientBuilder, NetworkSecurityGroup, ResourceNames, Result};

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
        .ok();

    match run(&args) {
        Ok(()) => {
            println!("Terraform code successfully generated!");
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}

/*--------------------------------------------------------------------------------------
  Fetch, Decode, Render, and Write
--------------------------------------------------------------------------------------*/

fn run(args: &cli::Args) -> Result<()> {
    let feed = match &args.json_file {
        Some(json_file) => AddressFeed::from_file(json_file)?,
        None => {
            let mut client_builder = ClientBuilder::new();
            if let Some(url) = &args.url {
                client_builder.url(url);
            }
            if let Some(timeout) = args.timeout {
                client_builder.timeout(timeout);
            }
            client_builder.build().get_feed()?
        }
    };

    let names = ResourceNames {
        resource_group: args.resource_group.clone(),
        nsg_name: args.nsg_name.clone(),
        nsg_display_name: args.nsg_display_name.clone(),
    };
    let nsg = NetworkSecurityGroup::from_feed(&names, &feed)?;
    cli::log::generated_rules(&feed, &nsg);

    if args.summary {
        cli::output::address_block_table(&feed);
    }

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&nsg, csv_file)?;
    }

    zscaler_address_tool::write_output(&args.output, &nsg.render())
}
