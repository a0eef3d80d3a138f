//! Station name ↔ telecode lookup.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::Telecode;

use super::error::StationError;

/// `name|CODE` pairs inside the station feed. Anything else is noise.
static STATION_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\x{4e00}-\x{9fa5}]+)\|([A-Z]+)").expect("station pattern is valid")
});

/// One station from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub telecode: Telecode,
}

/// Bidirectional station lookup.
///
/// Built once from a feed snapshot and read-only afterwards, so it can be
/// shared by reference wherever names or telecodes need resolving.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    by_name: HashMap<String, Telecode>,
    by_code: HashMap<Telecode, String>,
}

impl StationDirectory {
    /// Build a directory from raw feed text.
    ///
    /// The feed is scanned for `name|CODE` pairs; surrounding text (such as
    /// the JavaScript assignment the feed is wrapped in) is ignored. Text with
    /// no pairs gives an empty directory.
    ///
    /// ```
    /// use tickets::stations::StationDirectory;
    ///
    /// let dir = StationDirectory::from_feed("var station_names ='@bjb|北京北|VAP|beijingbei|bjb|0';");
    /// assert_eq!(dir.resolve("北京北").map(|c| c.as_str()), Some("VAP"));
    /// assert_eq!(dir.resolve_name("VAP"), Some("北京北"));
    /// ```
    pub fn from_feed(text: &str) -> Self {
        Self::from_stations(parse_feed(text))
    }

    /// Build a directory from a feed snapshot saved on disk.
    pub fn from_feed_file(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| StationError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_feed(&text))
    }

    /// Build a directory from already-extracted stations.
    ///
    /// When a name or telecode repeats, the later station wins.
    pub fn from_stations(stations: impl IntoIterator<Item = Station>) -> Self {
        let mut by_name = HashMap::new();
        let mut by_code = HashMap::new();

        for station in stations {
            // Drop stale reverse entries so both maps stay one-to-one
            if let Some(old_code) = by_name.insert(station.name.clone(), station.telecode.clone())
            {
                by_code.remove(&old_code);
            }
            if let Some(old_name) = by_code.insert(station.telecode.clone(), station.name.clone())
                && old_name != station.name
            {
                by_name.remove(&old_name);
            }
        }

        Self { by_name, by_code }
    }

    /// Look up the telecode for a station name.
    ///
    /// Returns `None` for empty or unknown names.
    pub fn resolve(&self, name: &str) -> Option<&Telecode> {
        if name.is_empty() {
            return None;
        }
        self.by_name.get(name)
    }

    /// Look up the station name for a telecode.
    ///
    /// Returns `None` for empty or unknown telecodes.
    pub fn resolve_name(&self, telecode: &str) -> Option<&str> {
        let telecode = Telecode::parse(telecode).ok()?;
        self.by_code.get(&telecode).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All stations, ordered by name.
    pub fn stations(&self) -> Vec<Station> {
        self.by_name
            .iter()
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .map(|(name, telecode)| Station {
                name: name.clone(),
                telecode: telecode.clone(),
            })
            .collect()
    }
}

/// Extract every station pair from feed text, in feed order.
pub fn parse_feed(text: &str) -> Vec<Station> {
    STATION_PAIR
        .captures_iter(text)
        .filter_map(|caps| {
            let telecode = Telecode::parse(&caps[2]).ok()?;
            Some(Station {
                name: caps[1].to_string(),
                telecode,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = "var station_names ='@bjb|北京北|VAP|beijingbei|bjb|0\
        @bjd|北京东|BOP|beijingdong|bjd|1@bji|北京|BJP|beijing|bj|2\
        @sha|上海|SHH|shanghai|sh|3';";

    #[test]
    fn parses_wrapped_feed() {
        let dir = StationDirectory::from_feed(FEED);
        assert_eq!(dir.len(), 4);
        assert_eq!(dir.resolve("北京").map(Telecode::as_str), Some("BJP"));
        assert_eq!(dir.resolve("上海").map(Telecode::as_str), Some("SHH"));
        assert_eq!(dir.resolve_name("BOP"), Some("北京东"));
    }

    #[test]
    fn absent_lookups_return_none() {
        let dir = StationDirectory::from_feed(FEED);
        assert!(dir.resolve("").is_none());
        assert!(dir.resolve("火星").is_none());
        assert!(dir.resolve_name("").is_none());
        assert!(dir.resolve_name("XXX").is_none());
        assert!(dir.resolve_name("bjp").is_none());
    }

    #[test]
    fn noise_only_gives_empty_directory() {
        let dir = StationDirectory::from_feed("<html>404 not found</html>");
        assert!(dir.is_empty());
        assert!(StationDirectory::from_feed("").is_empty());
    }

    #[test]
    fn ignores_pairs_with_lowercase_codes() {
        let stations = parse_feed("北京|bjp 上海|SHH");
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "上海");
    }

    #[test]
    fn later_duplicates_win() {
        let dir = StationDirectory::from_feed("北京|AAA 北京|BJP");
        assert_eq!(dir.resolve("北京").map(Telecode::as_str), Some("BJP"));
        assert_eq!(dir.resolve_name("BJP"), Some("北京"));
        assert!(dir.resolve_name("AAA").is_none());
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn stations_are_sorted_by_name() {
        let dir = StationDirectory::from_feed(FEED);
        let names: Vec<_> = dir.stations().into_iter().map(|s| s.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn from_feed_file_reads_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("station_name.js");
        std::fs::write(&path, FEED).unwrap();

        let directory = StationDirectory::from_feed_file(&path).unwrap();
        assert_eq!(directory.len(), 4);
    }

    #[test]
    fn from_feed_file_missing_is_io_error() {
        let err = StationDirectory::from_feed_file("/nonexistent/station_name.js").unwrap_err();
        assert!(matches!(err, StationError::Io { .. }));
    }
}
