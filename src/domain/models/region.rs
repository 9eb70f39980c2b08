use serde::Serialize;
use crate::error::FormError;

/// A named seating area with its capacity and house rules.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub max_party_size: u32,
    pub children_allowed: bool,
    pub smoking_allowed: bool,
}

pub static REGIONS: [Region; 4] = [
    Region { name: "Main Hall", max_party_size: 12, children_allowed: true, smoking_allowed: false },
    Region { name: "Bar", max_party_size: 4, children_allowed: false, smoking_allowed: false },
    Region { name: "Riverside", max_party_size: 8, children_allowed: true, smoking_allowed: false },
    Region { name: "Riverside (Smoking)", max_party_size: 6, children_allowed: false, smoking_allowed: true },
];

pub fn find_region(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}

impl Region {
    /// Checks party attributes against the region's rules. Stops at the first
    /// violated rule: party size, then children, then smoking.
    pub fn check(&self, party_size: Option<u32>, has_children: bool, smoking: bool) -> Result<(), FormError> {
        if party_size.is_some_and(|size| size > self.max_party_size) {
            return Err(FormError::PartyTooLarge {
                region: self.name.to_string(),
                max: self.max_party_size,
            });
        }

        if has_children && !self.children_allowed {
            return Err(FormError::ChildrenNotAllowed { region: self.name.to_string() });
        }

        if smoking && !self.smoking_allowed {
            return Err(FormError::SmokingNotAllowed { region: self.name.to_string() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_region() {
        let bar = find_region("Bar").unwrap();
        assert_eq!(bar.max_party_size, 4);
        assert!(!bar.children_allowed);

        assert!(find_region("Rooftop").is_none());
        assert!(find_region("bar").is_none(), "Region names are matched exactly");
    }

    #[test]
    fn test_size_rule_wins_over_children_rule() {
        let bar = find_region("Bar").unwrap();
        let err = bar.check(Some(6), true, true).unwrap_err();
        assert_eq!(err.to_string(), "Max size for Bar is 4");
    }

    #[test]
    fn test_children_rule_wins_over_smoking_rule() {
        let bar = find_region("Bar").unwrap();
        let err = bar.check(Some(2), true, true).unwrap_err();
        assert_eq!(err.to_string(), "Bar does not allow children.");
    }

    #[test]
    fn test_smoking_rule() {
        let riverside = find_region("Riverside").unwrap();
        let err = riverside.check(Some(2), true, true).unwrap_err();
        assert_eq!(err.to_string(), "Riverside does not allow smoking.");

        let smoking_area = find_region("Riverside (Smoking)").unwrap();
        assert!(smoking_area.check(Some(6), false, true).is_ok());
    }

    #[test]
    fn test_missing_party_size_skips_size_rule() {
        let bar = find_region("Bar").unwrap();
        assert!(bar.check(None, false, false).is_ok());
    }

    #[test]
    fn test_max_size_is_inclusive() {
        let main_hall = find_region("Main Hall").unwrap();
        assert!(main_hall.check(Some(12), true, false).is_ok());
        assert!(main_hall.check(Some(13), false, false).is_err());
    }
}
