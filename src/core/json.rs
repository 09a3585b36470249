use crate::core::errors::Result;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &[u8]) -> Result<JsonAddressFeed> {
    Ok(serde_json::from_slice(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON Address Feed
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct JsonAddressFeed {
    #[serde(rename = "Cloud Name")]
    pub cloud_name: String,

    pub content: Vec<JsonAddressBlock>,
}

/*--------------------------------------------------------------------------------------
  JSON Address Block
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct JsonAddressBlock {
    #[serde(rename = "IP Protocol")]
    pub ip_protocol: String,

    #[serde(rename = "Port")]
    pub port: i64,

    #[serde(rename = "Source")]
    pub source: String,

    #[serde(rename = "Domains")]
    pub domains: String,

    #[serde(rename = "IPs")]
    pub ips: Vec<String>,

    #[serde(rename = "Date Added")]
    pub date_added: String,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
