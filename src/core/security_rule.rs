use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Security Rule
-------------------------------------------------------------------------------------------------*/

/// Traffic direction a security rule applies to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Inbound,
    Outbound,
}

/// Action a security rule takes on matching traffic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Access {
    Allow,
    Deny,
}

/// One `security_rule` block of an `azurerm_network_security_group` resource.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SecurityRule {
    pub name: String,
    pub priority: u32,
    pub direction: Direction,
    pub access: Access,
    pub protocol: String,
    pub source_port_range: String,
    pub destination_port_range: String,
    pub source_address_prefix: String,
    pub destination_address_prefix: String,
}

/*--------------------------------------------------------------------------------------
  Display
--------------------------------------------------------------------------------------*/

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => write!(f, "Inbound"),
            Direction::Outbound => write!(f, "Outbound"),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Allow => write!(f, "Allow"),
            Access::Deny => write!(f, "Deny"),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Security Rule Implementation
--------------------------------------------------------------------------------------*/

const ANY: &str = "*";

impl SecurityRule {
    /// Outbound rule denying all traffic on every protocol, port, and address.
    pub fn deny_all_outbound(name: &str, priority: u32) -> Self {
        Self {
            name: name.to_string(),
            priority,
            direction: Direction::Outbound,
            access: Access::Deny,
            protocol: ANY.to_string(),
            source_port_range: ANY.to_string(),
            destination_port_range: ANY.to_string(),
            source_address_prefix: ANY.to_string(),
            destination_address_prefix: ANY.to_string(),
        }
    }

    /// Outbound rule allowing any protocol to `destination_port` on `destination_prefix`.
    pub fn allow_outbound(
        name: String,
        priority: u32,
        destination_port: &str,
        destination_prefix: &str,
    ) -> Self {
        Self {
            name,
            priority,
            direction: Direction::Outbound,
            access: Access::Allow,
            protocol: ANY.to_string(),
            source_port_range: ANY.to_string(),
            destination_port_range: destination_port.to_string(),
            source_address_prefix: ANY.to_string(),
            destination_address_prefix: destination_prefix.to_string(),
        }
    }

    /// Render the rule as the indented lines of an HCL `security_rule` block.
    pub fn lines(&self) -> Vec<String> {
        vec![
            "  security_rule {".to_string(),
            attribute("name", quoted(&self.name)),
            attribute("priority", self.priority.to_string()),
            attribute("direction", quoted(&self.direction.to_string())),
            attribute("access", quoted(&self.access.to_string())),
            attribute("protocol", quoted(&self.protocol)),
            attribute("source_port_range", quoted(&self.source_port_range)),
            attribute("destination_port_range", quoted(&self.destination_port_range)),
            attribute("source_address_prefix", quoted(&self.source_address_prefix)),
            attribute(
                "destination_address_prefix",
                quoted(&self.destination_address_prefix),
            ),
            "  }".to_string(),
        ]
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

// Attribute names are padded to the longest one so the `=` signs line up.
fn attribute(name: &str, value: String) -> String {
    format!("    {:<26} = {}", name, value)
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deny_all_outbound_lines() {
        let rule = SecurityRule::deny_all_outbound("DenyAllOutBound", 4000);
        let expected = vec![
            "  security_rule {",
            "    name                       = \"DenyAllOutBound\"",
            "    priority                   = 4000",
            "    direction                  = \"Outbound\"",
            "    access                     = \"Deny\"",
            "    protocol                   = \"*\"",
            "    source_port_range          = \"*\"",
            "    destination_port_range     = \"*\"",
            "    source_address_prefix      = \"*\"",
            "    destination_address_prefix = \"*\"",
            "  }",
        ];
        assert_eq!(rule.lines(), expected);
    }

    #[test]
    fn test_allow_outbound() {
        let rule =
            SecurityRule::allow_outbound("AllowZscaler-1-1".to_string(), 2001, "443", "1.2.3.4");
        assert_eq!(rule.direction, Direction::Outbound);
        assert_eq!(rule.access, Access::Allow);

        let lines = rule.lines();
        assert_eq!(lines[2], "    priority                   = 2001");
        assert_eq!(lines[7], "    destination_port_range     = \"443\"");
        assert_eq!(lines[9], "    destination_address_prefix = \"1.2.3.4\"");
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn test_direction_and_access_display() {
        assert_eq!(Direction::Inbound.to_string(), "Inbound");
        assert_eq!(Direction::Outbound.to_string(), "Outbound");
        assert_eq!(Access::Allow.to_string(), "Allow");
        assert_eq!(Access::Deny.to_string(), "Deny");
    }
}
