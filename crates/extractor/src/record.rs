//! Scraped move record

use sanitizer::clean;
use serde::{Deserialize, Serialize};

/// One fast move scraped from the listing table
///
/// Every field stays as text; numeric coercion happens in the database
/// through the declared column types. Audit columns are stamped by the
/// repository, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,
    pub move_type: String,
    pub power: String,
    pub energy_per_use: String,
    pub dps: String,
    pub eps: String,
    pub cooldown: String,
}

impl MoveRecord {
    /// Run every field through the sanitizer whitelist in place
    pub fn clean_fields(&mut self) {
        self.name = clean(&self.name);
        self.move_type = clean(&self.move_type);
        self.power = clean(&self.power);
        self.energy_per_use = clean(&self.energy_per_use);
        self.dps = clean(&self.dps);
        self.eps = clean(&self.eps);
        self.cooldown = clean(&self.cooldown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fields_touches_every_field() {
        let mut record = MoveRecord {
            name: " Fire Spin! ".to_string(),
            move_type: "Fire".to_string(),
            power: " 15 ".to_string(),
            energy_per_use: "-10".to_string(),
            dps: "10.00".to_string(),
            eps: "6.67".to_string(),
            cooldown: "1.50".to_string(),
        };

        record.clean_fields();

        assert_eq!(record.name, "Fire Spin");
        assert_eq!(record.move_type, "Fire");
        assert_eq!(record.power, "15");
        // The whitelist admits no minus sign; the sign is dropped just
        // as it is for any other excluded character.
        assert_eq!(record.energy_per_use, "10");
        assert_eq!(record.dps, "10.00");
        assert_eq!(record.eps, "6.67");
        assert_eq!(record.cooldown, "1.50");
    }

    #[test]
    fn test_clean_fields_is_idempotent() {
        let mut record = MoveRecord {
            name: "Water Gun (fast)".to_string(),
            ..Default::default()
        };
        record.clean_fields();
        let once = record.clone();
        record.clean_fields();
        assert_eq!(record, once);
    }
}
