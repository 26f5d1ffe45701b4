use crate::utils::StringUtils;
use rand::RngExt;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone, Default)]
pub struct PeopleNameGeneratorData {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl PeopleNameGeneratorData {
    pub fn new(first_names: Vec<String>, last_names: Vec<String>) -> Self {
        PeopleNameGeneratorData {
            first_names,
            last_names,
        }
    }

    pub fn first_name<R: RngExt + ?Sized>(&self, rng: &mut R) -> String {
        match self.first_names.choose(rng) {
            Some(name) => name.clone(),
            None => StringUtils::random_string(rng, 5),
        }
    }

    pub fn last_name<R: RngExt + ?Sized>(&self, rng: &mut R) -> String {
        match self.last_names.choose(rng) {
            Some(name) => name.clone(),
            None => StringUtils::random_string(rng, 8),
        }
    }
}
