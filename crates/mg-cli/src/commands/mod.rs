pub mod champions;
pub mod games;
pub mod play;
pub mod words;

use std::path::PathBuf;

use mg_games::{ChampionSource, WordSource};

fn word_source(file: Option<PathBuf>) -> WordSource {
    file.map_or(WordSource::Builtin, WordSource::File)
}

fn champion_source(file: Option<PathBuf>) -> ChampionSource {
    file.map_or(ChampionSource::Builtin, ChampionSource::File)
}
