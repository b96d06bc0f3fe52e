use std::collections::{BTreeMap, HashMap};

use super::models::{PlayerInfo, Standing, UNKNOWN_PLAYER_NAME};
use crate::series::models::{SeriesModel, GAMES_PER_SERIES};

#[derive(Debug, Default)]
struct Tally {
    total_score: i64,
    series_count: u32,
    best_game: i32,
    best_series: i32,
}

impl Tally {
    fn add(&mut self, series: &SeriesModel) {
        let series_total = series.total_score();
        self.total_score += i64::from(series_total);
        self.series_count += 1;
        self.best_game = self.best_game.max(series.best_game());
        self.best_series = self.best_series.max(series_total);
    }
}

/// Ranks players by total pinfall across every recorded series.
///
/// Series are expected to be validated already. Ties on total score are
/// broken by player id ascending, and tied players still get sequential
/// positions. Players missing from `roster` are listed under
/// [`UNKNOWN_PLAYER_NAME`] with an empty email.
pub fn aggregate_standings(
    series: &[SeriesModel],
    roster: &HashMap<String, PlayerInfo>,
) -> Vec<Standing> {
    // BTreeMap iteration yields player ids ascending, which the stable sort keeps for ties
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for entry in series {
        tallies
            .entry(entry.player_id.as_str())
            .or_default()
            .add(entry);
    }

    let mut ranked: Vec<(&str, Tally)> = tallies.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.total_score.cmp(&a.total_score));

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (player_id, tally))| {
            let games_played = tally.series_count * GAMES_PER_SERIES;
            let average_score = if games_played > 0 {
                tally.total_score as f64 / f64::from(games_played)
            } else {
                0.0
            };

            let (player_name, player_email) = match roster.get(player_id) {
                Some(info) => (info.name.clone(), info.email.clone()),
                None => (UNKNOWN_PLAYER_NAME.to_string(), String::new()),
            };

            Standing {
                position: index as u32 + 1,
                player_id: player_id.to_string(),
                player_name,
                player_email,
                total_score: tally.total_score,
                games_played,
                series_count: tally.series_count,
                average_score,
                best_game: tally.best_game,
                best_series: tally.best_series,
            }
        })
        .collect()
}
