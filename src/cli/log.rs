use log::{info, warn};
use zscaler_address_tool::{AddressFeed, NetworkSecurityGroup};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Generated Rules
--------------------------------------------------------------------------------------*/

pub fn generated_rules(feed: &AddressFeed, nsg: &NetworkSecurityGroup) {
    let count_blocks = feed.entries.len();
    let count_allow_rules = nsg.allow_rules().count();
    info!("Generated {count_allow_rules} allow rule(s) from {count_blocks} address block(s)");

    let count_empty_blocks = feed
        .entries
        .iter()
        .filter(|block| block.ips.is_empty())
        .count();
    if count_empty_blocks > 0 {
        warn!("{count_empty_blocks} address block(s) contained no IPs");
    };
}
