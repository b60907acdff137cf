use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A dotted Java package name, e.g. `com.carselling.oldcar`.
///
/// Used purely as a string pattern target for rewriting; validation is limited
/// to the dotted-segment shape and does not reject Java keywords.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageName(String);

impl PackageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package segments in order, e.g. `["com", "carselling", "oldcar"]`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PackageName {
    type Err = PackageNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PackageNameError::Empty);
        }

        for segment in s.split('.') {
            let mut chars = segment.chars();
            let valid = match chars.next() {
                Some(first) => {
                    (first.is_ascii_alphabetic() || first == '_' || first == '$')
                        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
                }
                None => false,
            };
            if !valid {
                return Err(PackageNameError::InvalidSegment(segment.to_string()));
            }
        }

        Ok(PackageName(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum PackageNameError {
    #[error("Package name cannot be empty")]
    Empty,

    #[error("Invalid package segment: '{0}'")]
    InvalidSegment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_parse() {
        let name: PackageName = "com.carselling.oldcar".parse().unwrap();
        assert_eq!(name.as_str(), "com.carselling.oldcar");
        assert_eq!(name.to_string(), "com.carselling.oldcar");
    }

    #[test]
    fn test_package_name_mixed_case_segments() {
        // The legacy tree uses capitalized segments
        let name: PackageName = "com.CarSelling.Sell.the.old.Car".parse().unwrap();
        let segments: Vec<&str> = name.segments().collect();
        assert_eq!(segments, vec!["com", "CarSelling", "Sell", "the", "old", "Car"]);
    }

    #[test]
    fn test_package_name_invalid() {
        assert!("".parse::<PackageName>().is_err());
        assert!("com..oldcar".parse::<PackageName>().is_err());
        assert!("com.1carselling".parse::<PackageName>().is_err());
        assert!("com.car-selling".parse::<PackageName>().is_err());
        assert!(".com.carselling".parse::<PackageName>().is_err());
    }

    #[test]
    fn test_package_name_single_segment() {
        let name: PackageName = "com".parse().unwrap();
        assert_eq!(name.segments().count(), 1);
    }
}
