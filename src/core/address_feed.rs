use crate::core::errors::{Error, Result};
use crate::core::json::{self, JsonAddressBlock, JsonAddressFeed};
use ipnetwork::IpNetwork;
use log::info;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Address Feed
-------------------------------------------------------------------------------------------------*/

/// The decoded Zscaler address feed: the cloud name and its ordered address blocks.
///
/// Block order and the order of IPs within each block determine the priorities of the generated
/// security rules.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AddressFeed {
    pub cloud_name: String,
    pub entries: Vec<AddressBlock>,
}

/// One dated block of published IP literals.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AddressBlock {
    pub ip_protocol: String,
    pub port: i64,
    pub source: String,
    pub domains: String,
    pub ips: Vec<String>,
    pub date_added: String,
}

/*--------------------------------------------------------------------------------------
  Address Feed Implementation
--------------------------------------------------------------------------------------*/

impl AddressFeed {
    /// Decode the feed from the raw JSON bytes.
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let feed: AddressFeed = json::parse(json)?.into();
        info!(
            "Decoded address feed for {:?}: {} block(s), {} IP(s)",
            feed.cloud_name,
            feed.entries.len(),
            feed.ip_count()
        );
        Ok(feed)
    }

    /// Read and decode a local copy of the feed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Read address feed from: {:?}", path);
        let json = fs::read(path).map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Total number of IP literals across all blocks.
    pub fn ip_count(&self) -> usize {
        self.entries.iter().map(|block| block.ips.len()).sum()
    }

    /// Count of (IPv4, IPv6) prefixes across all blocks; invalid literals are not counted.
    pub fn prefix_counts(&self) -> (usize, usize) {
        self.entries
            .iter()
            .flat_map(|block| block.networks())
            .fold((0, 0), |(v4, v6), network| match network {
                IpNetwork::V4(_) => (v4 + 1, v6),
                IpNetwork::V6(_) => (v4, v6 + 1),
            })
    }
}

impl From<JsonAddressFeed> for AddressFeed {
    fn from(json_feed: JsonAddressFeed) -> Self {
        Self {
            cloud_name: json_feed.cloud_name,
            entries: json_feed.content.into_iter().map(AddressBlock::from).collect(),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Address Block Implementation
--------------------------------------------------------------------------------------*/

impl AddressBlock {
    /// Parse the block's IP literals as networks, skipping invalid literals.
    pub fn networks(&self) -> impl Iterator<Item = IpNetwork> + '_ {
        self.ips.iter().filter_map(|ip| ip.parse::<IpNetwork>().ok())
    }

    /// The block's IP literals that are not a valid IPv4/IPv6 address or CIDR prefix.
    pub fn invalid_ips(&self) -> impl Iterator<Item = &str> + '_ {
        self.ips
            .iter()
            .map(String::as_str)
            .filter(|ip| ip.parse::<IpNetwork>().is_err())
    }
}

impl From<JsonAddressBlock> for AddressBlock {
    fn from(json_block: JsonAddressBlock) -> Self {
        Self {
            ip_protocol: json_block.ip_protocol,
            port: json_block.port,
            source: json_block.source,
            domains: json_block.domains,
            ips: json_block.ips,
            date_added: json_block.date_added,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
