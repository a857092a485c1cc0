use std::fmt;

use serde::{Deserialize, Serialize};

/// Named protocol versions, in activation order. Each fork defines its own
/// block schema; blinded blocks exist from Bellatrix onward.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkName {
    Phase0,
    Altair,
    Bellatrix,
    Capella,
    Deneb,
}

impl ForkName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForkName::Phase0 => "phase0",
            ForkName::Altair => "altair",
            ForkName::Bellatrix => "bellatrix",
            ForkName::Capella => "capella",
            ForkName::Deneb => "deneb",
        }
    }
}

impl fmt::Display for ForkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ForkName;

    #[test]
    fn fork_names_serialize_lowercase() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&ForkName::Phase0)?, "\"phase0\"");
        assert_eq!(serde_json::to_string(&ForkName::Deneb)?, "\"deneb\"");
        assert_eq!(ForkName::Capella.to_string(), "capella");
        assert!(ForkName::Bellatrix < ForkName::Capella);
        Ok(())
    }
}
