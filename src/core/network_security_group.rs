use crate::core::address_feed::AddressFeed;
use crate::core::errors::{Error, Result};
use crate::core::security_rule::{Access, SecurityRule};
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Rule Numbering
-------------------------------------------------------------------------------------------------*/

/// Name of the catch-all outbound deny rule.
pub const DENY_ALL_RULE_NAME: &str = "DenyAllOutBound";

/// Priority of the catch-all outbound deny rule.
pub const DENY_ALL_PRIORITY: u32 = 4000;

/// Priority of the first generated allow rule.
pub const FIRST_ALLOW_PRIORITY: u32 = 2001;

/// Destination port opened by every allow rule.
pub const ALLOW_DESTINATION_PORT: &str = "443";

/// First line of every generated file.
pub const HEADER: &str = "# Terraform code generated by zscaler-address-tool";

/*-------------------------------------------------------------------------------------------------
  Resource Names
-------------------------------------------------------------------------------------------------*/

/// Identifiers used in the generated resource block.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResourceNames {
    /// Terraform name of the `azurerm_resource_group` the NSG references.
    pub resource_group: String,
    /// Terraform name of the `azurerm_network_security_group` resource.
    pub nsg_name: String,
    /// Azure-facing name of the network security group.
    pub nsg_display_name: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            resource_group: "whitelist-dev".to_string(),
            nsg_name: "whitelist-dev".to_string(),
            nsg_display_name: "zpa-whitelist-dev".to_string(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Network Security Group
-------------------------------------------------------------------------------------------------*/

/// An `azurerm_network_security_group` resource: the deny-all rule followed by one allow rule per
/// IP literal in the address feed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NetworkSecurityGroup {
    pub names: ResourceNames,
    pub rules: Vec<SecurityRule>,
}

impl NetworkSecurityGroup {
    /// Build the security group for an address feed.
    ///
    /// Allow rules are named `AllowZscaler-{block}-{ip}` (1-based) and numbered from
    /// [FIRST_ALLOW_PRIORITY] in feed order. Fails with [Error::PriorityOverflow] when the feed
    /// holds too many IPs to number them below [DENY_ALL_PRIORITY].
    pub fn from_feed(names: &ResourceNames, feed: &AddressFeed) -> Result<Self> {
        let count = feed.ip_count();
        let available = (DENY_ALL_PRIORITY - FIRST_ALLOW_PRIORITY) as usize;
        if count > available {
            return Err(Error::PriorityOverflow {
                count,
                first: FIRST_ALLOW_PRIORITY,
                deny: DENY_ALL_PRIORITY,
            });
        }

        let mut rules = Vec::with_capacity(count + 1);
        rules.push(SecurityRule::deny_all_outbound(
            DENY_ALL_RULE_NAME,
            DENY_ALL_PRIORITY,
        ));

        let (rules, _) = feed.entries.iter().enumerate().fold(
            (rules, FIRST_ALLOW_PRIORITY),
            |(mut rules, priority), (i, block)| {
                info!(
                    "Rules are being generated for IP Block {} ({}).",
                    i + 1,
                    block.date_added
                );

                for ip in block.invalid_ips() {
                    warn!(
                        "IP Block {} has invalid IP prefix {:?}; rendering it verbatim",
                        i + 1,
                        ip
                    );
                }

                let next_priority =
                    block
                        .ips
                        .iter()
                        .enumerate()
                        .fold(priority, |priority, (j, ip)| {
                            rules.push(SecurityRule::allow_outbound(
                                format!("AllowZscaler-{}-{}", i + 1, j + 1),
                                priority,
                                ALLOW_DESTINATION_PORT,
                                ip,
                            ));
                            priority + 1
                        });

                (rules, next_priority)
            },
        );

        Ok(Self {
            names: names.clone(),
            rules,
        })
    }

    /// The generated allow rules, in priority order.
    pub fn allow_rules(&self) -> impl Iterator<Item = &SecurityRule> {
        self.rules.iter().filter(|rule| rule.access == Access::Allow)
    }

    /// Render the resource as Terraform lines.
    pub fn lines(&self) -> Vec<String> {
        let resource_group = &self.names.resource_group;

        let mut lines = vec![
            HEADER.to_string(),
            format!(
                "resource \"azurerm_network_security_group\" \"{}\" {{",
                self.names.nsg_name
            ),
            format!("  name                = \"{}\"", self.names.nsg_display_name),
            format!("  location            = azurerm_resource_group.{resource_group}.location"),
            format!("  resource_group_name = azurerm_resource_group.{resource_group}.name"),
            String::new(),
        ];
        lines.extend(self.rules.iter().flat_map(SecurityRule::lines));
        lines.push("}".to_string());
        lines
    }

    /// Render the resource as the text of a Terraform file.
    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
