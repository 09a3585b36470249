use log::info;
use std::path::Path;
use zscaler_address_tool::{NetworkSecurityGroup, Result};

/*-------------------------------------------------------------------------------------------------
  Save Security Rules to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(nsg: &NetworkSecurityGroup, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.serialize([
        "Name",
        "Priority",
        "Access",
        "Destination Port Range",
        "Destination Address Prefix",
    ])?;

    // Write rule records
    for rule in &nsg.rules {
        let record = (
            &rule.name,
            rule.priority,
            rule.access.to_string(),
            &rule.destination_port_range,
            &rule.destination_address_prefix,
        );
        writer.serialize(record)?;
    }

    writer.flush().map_err(csv::Error::from)?;

    info!("Saved {} security rules to: {:?}", nsg.rules.len(), path);
    Ok(())
}
