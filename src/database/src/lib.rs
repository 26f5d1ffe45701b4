mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

pub struct DatabaseEntity {
    pub leagues: Vec<LeagueEntity>,
    pub clubs: Vec<ClubEntity>,
    pub names: NamesEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        Ok(DatabaseEntity {
            leagues: LeagueLoader::load()?,
            clubs: ClubLoader::load()?,
            names: NamesLoader::load()?,
        })
    }
}
