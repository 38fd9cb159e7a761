use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use crate::error::DataError;
use crate::models::*;

/// Read the winners data file into memory, preserving source order.
pub async fn load_winners(path: impl AsRef<Path>) -> Result<Vec<SeasonRecord>, DataError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DataError::DataUnavailable(format!("{}: {}", path.display(), e)))?;

    let records: Vec<SeasonRecord> = serde_json::from_str(&raw)
        .map_err(|e| DataError::DataCorrupt(format!("{}: {}", path.display(), e)))?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.season.as_str()) {
            tracing::warn!("Duplicate season {} in {}", record.season, path.display());
        }
    }

    Ok(records)
}

/// Immutable record set shared by every request.
///
/// A failed load is kept rather than aborting startup, so data endpoints
/// answer with the load error while `/` and `/health` keep working.
#[derive(Debug, Clone)]
pub struct WinnersStore {
    records: Result<Arc<[SeasonRecord]>, DataError>,
}

impl WinnersStore {
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match load_winners(path).await {
            Ok(records) => {
                tracing::info!("Loaded {} seasons from {}", records.len(), path.display());
                Self::from_records(records)
            }
            Err(e) => {
                tracing::error!("Failed to load winners data: {} ({})", e, e.detail());
                Self::from_error(e)
            }
        }
    }

    pub fn from_records(records: Vec<SeasonRecord>) -> Self {
        Self { records: Ok(records.into()) }
    }

    pub fn from_error(err: DataError) -> Self {
        Self { records: Err(err) }
    }

    pub fn records(&self) -> Result<&[SeasonRecord], DataError> {
        self.records.as_deref().map_err(|e| e.clone())
    }

    /// Cheap handle to the whole record set, for responses that return all of it.
    pub fn shared(&self) -> Result<Arc<[SeasonRecord]>, DataError> {
        self.records.clone()
    }
}

// Lookups

/// First record whose season equals `season` exactly.
pub fn get_winner_by_season<'a>(records: &'a [SeasonRecord], season: &str) -> Option<&'a SeasonRecord> {
    records.iter().find(|r| r.season == season)
}

/// Records whose winner equals `team`, ignoring case.
pub fn get_wins_by_team(records: &[SeasonRecord], team: &str) -> Vec<SeasonRecord> {
    let team = team.to_lowercase();
    records
        .iter()
        .filter(|r| r.winner.to_lowercase() == team)
        .cloned()
        .collect()
}

/// Records whose manager contains `manager`, ignoring case.
pub fn get_wins_by_manager(records: &[SeasonRecord], manager: &str) -> Vec<SeasonRecord> {
    let manager = manager.to_lowercase();
    records
        .iter()
        .filter(|r| r.manager.to_lowercase().contains(&manager))
        .cloned()
        .collect()
}

// Aggregation

/// Count occurrences per key, keeping first-seen order.
fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match index.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    // Stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn compute_stats(records: &[SeasonRecord]) -> StatsResponse {
    let mut highest = PointsRecord { points: Some(0), season: String::new() };
    let mut lowest = PointsRecord { points: None, season: String::new() };

    for record in records {
        if highest.points.is_none_or(|p| record.points > p) {
            highest = PointsRecord { points: Some(record.points), season: record.season.clone() };
        }
        if lowest.points.is_none_or(|p| record.points < p) {
            lowest = PointsRecord { points: Some(record.points), season: record.season.clone() };
        }
    }

    StatsResponse {
        total_seasons: records.len(),
        teams_by_wins: tally(records.iter().map(|r| r.winner.as_str())),
        managers_by_wins: tally(records.iter().map(|r| r.manager.as_str())),
        highest_points: highest,
        lowest_points: lowest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(season: &str, winner: &str, manager: &str, points: i64) -> SeasonRecord {
        SeasonRecord {
            season: season.to_string(),
            winner: winner.to_string(),
            manager: manager.to_string(),
            points,
        }
    }

    fn sample() -> Vec<SeasonRecord> {
        vec![
            record("2015-2016", "Leicester City", "Claudio Ranieri", 81),
            record("2016-2017", "Chelsea", "Antonio Conte", 93),
            record("2017-2018", "Manchester City", "Pep Guardiola", 100),
            record("2018-2019", "Manchester City", "Pep Guardiola", 98),
            record("2019-2020", "Liverpool", "Jürgen Klopp", 99),
            record("2020-2021", "Manchester City", "Pep Guardiola", 86),
        ]
    }

    #[test]
    fn season_lookup_is_exact() {
        let records = sample();
        let found = get_winner_by_season(&records, "2019-2020").unwrap();
        assert_eq!(found.winner, "Liverpool");

        assert!(get_winner_by_season(&records, "2019").is_none());
        assert!(get_winner_by_season(&records, "1999-2000").is_none());
    }

    #[test]
    fn season_lookup_prefers_first_duplicate() {
        let records = vec![
            record("2020-2021", "Manchester City", "Pep Guardiola", 86),
            record("2020-2021", "Manchester United", "Ole Gunnar Solskjær", 74),
        ];
        assert_eq!(get_winner_by_season(&records, "2020-2021").unwrap().points, 86);
    }

    #[test]
    fn team_lookup_ignores_case_but_not_substrings() {
        let records = sample();
        let wins = get_wins_by_team(&records, "manchester city");
        assert_eq!(wins.len(), 3);
        assert_eq!(wins[0].season, "2017-2018");
        assert_eq!(wins[2].season, "2020-2021");

        assert!(get_wins_by_team(&records, "Manchester").is_empty());
        assert!(get_wins_by_team(&records, "Leicester").is_empty());
    }

    #[test]
    fn manager_lookup_matches_substrings() {
        let records = sample();
        assert_eq!(get_wins_by_manager(&records, "guardiola").len(), 3);
        assert_eq!(get_wins_by_manager(&records, "KLOPP").len(), 1);
        assert_eq!(get_wins_by_manager(&records, "o").len(), 6);
        assert!(get_wins_by_manager(&records, "Ferguson").is_empty());
    }

    #[test]
    fn stats_match_worked_example() {
        let records = vec![
            record("2020-2021", "Manchester City", "Pep Guardiola", 86),
            record("2021-2022", "Manchester City", "Pep Guardiola", 93),
        ];
        let stats = compute_stats(&records);

        assert_eq!(stats.total_seasons, 2);
        assert_eq!(stats.teams_by_wins, vec![("Manchester City".to_string(), 2)]);
        assert_eq!(stats.managers_by_wins, vec![("Pep Guardiola".to_string(), 2)]);
        assert_eq!(stats.highest_points, PointsRecord { points: Some(93), season: "2021-2022".into() });
        assert_eq!(stats.lowest_points, PointsRecord { points: Some(86), season: "2020-2021".into() });
    }

    #[test]
    fn stats_ties_keep_first_seen_order() {
        let records = vec![
            record("2000-2001", "Arsenal", "Arsène Wenger", 90),
            record("2001-2002", "Chelsea", "José Mourinho", 95),
            record("2002-2003", "Liverpool", "Jürgen Klopp", 95),
            record("2003-2004", "Chelsea", "José Mourinho", 90),
            record("2004-2005", "Liverpool", "Jürgen Klopp", 88),
        ];
        let stats = compute_stats(&records);

        let teams: Vec<&str> = stats.teams_by_wins.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(teams, vec!["Chelsea", "Liverpool", "Arsenal"]);
        let total: usize = stats.teams_by_wins.iter().map(|(_, n)| n).sum();
        assert_eq!(total, stats.total_seasons);

        assert_eq!(stats.highest_points.season, "2001-2002");
        assert_eq!(stats.lowest_points.season, "2004-2005");
    }

    #[test]
    fn stats_over_empty_dataset() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_seasons, 0);
        assert!(stats.teams_by_wins.is_empty());
        assert_eq!(stats.highest_points, PointsRecord { points: Some(0), season: String::new() });
        assert_eq!(stats.lowest_points, PointsRecord { points: None, season: String::new() });
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_winners(dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn load_reports_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"season": "2020-2021", "winner": "Manchester City"}}]"#).unwrap();

        let err = load_winners(file.path()).await.unwrap_err();
        assert!(matches!(err, DataError::DataCorrupt(_)));
    }

    #[tokio::test]
    async fn load_preserves_source_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let records = load_winners(file.path()).await.unwrap();
        assert_eq!(records, sample());
    }

    #[tokio::test]
    async fn load_keeps_duplicate_seasons_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let records = vec![
            record("2020-2021", "Manchester City", "Pep Guardiola", 86),
            record("2021-2022", "Manchester City", "Pep Guardiola", 93),
            record("2020-2021", "Manchester United", "Ole Gunnar Solskjær", 74),
        ];
        file.write_all(serde_json::to_string(&records).unwrap().as_bytes()).unwrap();

        let loaded = load_winners(file.path()).await.unwrap();
        assert_eq!(loaded, records);
        assert_eq!(get_winner_by_season(&loaded, "2020-2021").unwrap().winner, "Manchester City");
    }

    #[test]
    fn shared_handle_points_at_same_records() {
        let store = WinnersStore::from_records(sample());
        let a = store.shared().unwrap();
        let b = store.shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(&a[..], store.records().unwrap());
    }

    #[tokio::test]
    async fn store_keeps_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = WinnersStore::load(dir.path().join("missing.json")).await;
        assert!(matches!(store.records(), Err(DataError::DataUnavailable(_))));
    }
}
