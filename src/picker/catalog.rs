/// The fixed photo catalog
///
/// All of Cooper's photos live under `cooper/` next to the executable's
/// working directory and follow a single naming scheme. The catalog is
/// built once at startup and never changes afterwards.

use std::fmt;

use super::random::RandomSource;

/// Number of photos in the catalog
pub const CATALOG_SIZE: usize = 20;

/// Ordered list of the available photo paths.
///
/// Paths are relative (`cooper/cooper_<n>.jpeg`, n = 1..=20) and are
/// resolved by whoever displays them; the catalog itself never touches
/// the filesystem.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    paths: Vec<String>,
}

impl ImageCatalog {
    /// Build the catalog of all 20 photo paths
    pub fn new() -> Self {
        let paths = (1..=CATALOG_SIZE)
            .map(|n| format!("cooper/cooper_{}.jpeg", n))
            .collect();

        ImageCatalog { paths }
    }

    /// Number of photos in the catalog (always `CATALOG_SIZE`)
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All catalog paths, in their fixed order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Whether `path` is one of the catalog entries
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Draw one photo path uniformly at random.
    ///
    /// Every entry is equally likely, and each draw is independent of
    /// the previous one.
    pub fn pick<R: RandomSource>(&self, random: &mut R) -> Selection {
        let index = random.pick_index(self.paths.len());
        debug_assert!(index < self.paths.len());

        Selection(self.paths[index].clone())
    }
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// One photo path drawn from the catalog.
///
/// Only obtainable through [`ImageCatalog::pick`], so a `Selection` is
/// always a catalog member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(String);

impl Selection {
    /// The selected photo's relative path
    pub fn as_path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::random::{FixedIndex, ThreadRandom};
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_catalog_has_twenty_paths() {
        let catalog = ImageCatalog::new();

        assert_eq!(catalog.len(), 20);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_paths_follow_naming_scheme() {
        let catalog = ImageCatalog::new();
        let paths = catalog.paths();

        assert_eq!(paths[0], "cooper/cooper_1.jpeg");
        assert_eq!(paths[19], "cooper/cooper_20.jpeg");
        assert!(paths.iter().all(|p| p.starts_with("cooper/cooper_")));
        assert!(paths.iter().all(|p| p.ends_with(".jpeg")));
    }

    #[test]
    fn test_pick_with_pinned_index() {
        let catalog = ImageCatalog::new();

        assert_eq!(catalog.pick(&mut FixedIndex(0)).as_path(), "cooper/cooper_1.jpeg");
        assert_eq!(catalog.pick(&mut FixedIndex(4)).as_path(), "cooper/cooper_5.jpeg");
        assert_eq!(catalog.pick(&mut FixedIndex(19)).as_path(), "cooper/cooper_20.jpeg");
    }

    #[test]
    fn test_pick_returns_member_of_catalog() {
        let catalog = ImageCatalog::new();
        let mut random = ThreadRandom;

        for _ in 0..1_000 {
            let selection = catalog.pick(&mut random);
            assert!(catalog.contains(selection.as_path()));
        }
    }

    #[test]
    fn test_pick_eventually_shows_every_photo() {
        let catalog = ImageCatalog::new();
        let mut random = ThreadRandom;

        // 10_000 uniform draws over 20 entries miss one with probability
        // (19/20)^10_000 per entry, i.e. never in practice.
        let seen: HashSet<String> = (0..10_000)
            .map(|_| catalog.pick(&mut random).as_path().to_owned())
            .collect();

        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_pick_has_no_fixed_successor() {
        let catalog = ImageCatalog::new();
        let mut random = ThreadRandom;

        let mut successors: HashMap<String, HashSet<String>> = HashMap::new();
        let mut previous = catalog.pick(&mut random);
        for _ in 0..5_000 {
            let next = catalog.pick(&mut random);
            successors
                .entry(previous.as_path().to_owned())
                .or_default()
                .insert(next.as_path().to_owned());
            previous = next;
        }

        // A deterministic successor mapping would leave every set with
        // exactly one entry.
        assert!(successors.values().any(|seen| seen.len() > 1));
    }
}
