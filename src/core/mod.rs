/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address_feed;
pub mod client;
pub mod errors;
pub mod json;
pub mod network_security_group;
pub mod output;
pub mod security_rule;
