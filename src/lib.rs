//! Generate Azure network security group Terraform from the Zscaler address feed.
//!
//! The library fetches the published Zscaler address feed, decodes it into an [AddressFeed], builds
//! a [NetworkSecurityGroup] with a catch-all outbound deny rule plus one outbound allow rule per
//! published IP, and renders it as Terraform.
//!
//! ```no_run
//! use zscaler_address_tool::{NetworkSecurityGroup, ResourceNames, Result};
//!
//! fn main() -> Result<()> {
//!     let feed = zscaler_address_tool::get_feed()?;
//!     let nsg = NetworkSecurityGroup::from_feed(&ResourceNames::default(), &feed)?;
//!     zscaler_address_tool::write_output("output.tf", &nsg.render())
//! }
//! ```

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::address_feed::{AddressBlock, AddressFeed};
pub use crate::core::client::{get_feed, Client, ClientBuilder};
pub use crate::core::errors::{Error, Result};
pub use crate::core::network_security_group::{
    NetworkSecurityGroup, ResourceNames, ALLOW_DESTINATION_PORT, DENY_ALL_PRIORITY,
    DENY_ALL_RULE_NAME, FIRST_ALLOW_PRIORITY, HEADER,
};
pub use crate::core::output::write_output;
pub use crate::core::security_rule::{Access, Direction, SecurityRule};

/*--------------------------------------------------------------------------------------
  Re-exports
--------------------------------------------------------------------------------------*/

pub use ipnetwork;
