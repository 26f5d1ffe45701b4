use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn new(first_name: String, last_name: String) -> Self {
        FullName {
            first_name,
            last_name,
        }
    }

    /// Short form used in match events: "J. Smith".
    pub fn display_name(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}. {}", initial, self.last_name),
            None => self.last_name.clone(),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_uses_initial() {
        let name = FullName::new("John".to_string(), "Smith".to_string());

        assert_eq!(name.display_name(), "J. Smith");
        assert_eq!(name.to_string(), "John Smith");
    }

    #[test]
    fn display_name_without_first_name() {
        let name = FullName::new(String::new(), "Pele".to_string());

        assert_eq!(name.display_name(), "Pele");
    }
}
