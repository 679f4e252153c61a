//! Category taxonomy
//!
//! The taxonomy is a two-level mapping from category names to an ordered list
//! of subcategory names, read from a plain text file with one category per
//! line:
//!
//! ```text
//! Food:Groceries,Restaurants,Snacks
//! Transport:Fuel,Public Transport,Taxi
//! ```
//!
//! Names cannot be escaped, so a category containing `,` or a subcategory
//! containing `:` is rejected at load time, as are duplicate categories.
//! The file order is kept because it drives the numbered menus.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use super::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// Written to `settings.conf` the first time the ledger runs
pub const DEFAULT_TAXONOMY: &str = "\
Food:Groceries,Restaurants,Snacks
Transport:Fuel,Public Transport,Taxi
";

/// A category and its subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Category name (unique within the taxonomy)
    pub name: String,
    /// Subcategory names in file order (never empty)
    pub subcategories: Vec<String>,
}


/// Read-only category configuration, loaded once per process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<CategoryEntry>,
}

impl Taxonomy {
    /// Load the taxonomy, writing the default file first if none exists
    pub fn load_or_create(paths: &LedgerPaths) -> LedgerResult<Self> {
        let path = paths.settings_file();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Config(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            std::fs::write(&path, DEFAULT_TAXONOMY).map_err(|e| {
                LedgerError::Config(format!(
                    "Failed to write default categories to {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!(path = %path.display(), "wrote default category configuration");
        }

        Self::load(&path)
    }

    /// Load the taxonomy from an existing file
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let taxonomy = Self::parse(&contents)
            .map_err(|e| LedgerError::Config(format!("{}: {}", path.display(), e)))?;

        debug!(
            path = %path.display(),
            categories = taxonomy.categories.len(),
            "loaded category configuration"
        );
        Ok(taxonomy)
    }

    /// Parse taxonomy text
    ///
    /// Blank lines are skipped; any malformed line aborts the whole parse.
    pub fn parse(contents: &str) -> Result<Self, TaxonomyParseError> {
        let mut categories: Vec<CategoryEntry> = Vec::new();

        for (index, raw) in contents.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let (name, rest) = line
                .split_once(':')
                .ok_or(TaxonomyParseError::MissingColon(line_no))?;

            let name = name.trim();
            if name.is_empty() {
                return Err(TaxonomyParseError::EmptyCategory(line_no));
            }
            if name.contains(',') {
                return Err(TaxonomyParseError::ReservedCharacter {
                    line: line_no,
                    name: name.to_string(),
                });
            }
            if categories.iter().any(|c| c.name == name) {
                return Err(TaxonomyParseError::DuplicateCategory {
                    line: line_no,
                    name: name.to_string(),
                });
            }

            let mut subcategories = Vec::new();
            for sub in rest.split(',') {
                let sub = sub.trim();
                if sub.is_empty() {
                    return Err(TaxonomyParseError::EmptySubcategory {
                        line: line_no,
                        category: name.to_string(),
                    });
                }
                if sub.contains(':') {
                    return Err(TaxonomyParseError::ReservedCharacter {
                        line: line_no,
                        name: sub.to_string(),
                    });
                }
                subcategories.push(sub.to_string());
            }

            categories.push(CategoryEntry {
                name: name.to_string(),
                subcategories,
            });
        }

        if categories.is_empty() {
            return Err(TaxonomyParseError::NoCategories);
        }

        Ok(Self { categories })
    }

    /// All categories in file order
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// Find a category by exact name
    pub fn get(&self, name: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Check whether a category exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Why a taxonomy line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyParseError {
    MissingColon(usize),
    EmptyCategory(usize),
    EmptySubcategory { line: usize, category: String },
    ReservedCharacter { line: usize, name: String },
    DuplicateCategory { line: usize, name: String },
    NoCategories,
}

impl fmt::Display for TaxonomyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColon(line) => {
                write!(f, "line {}: expected 'Category:Sub1,Sub2'", line)
            }
            Self::EmptyCategory(line) => write!(f, "line {}: empty category name", line),
            Self::EmptySubcategory { line, category } => {
                write!(f, "line {}: empty subcategory in '{}'", line, category)
            }
            Self::ReservedCharacter { line, name } => write!(
                f,
                "line {}: name '{}' contains a reserved ':' or ',' character",
                line, name
            ),
            Self::DuplicateCategory { line, name } => {
                write!(f, "line {}: duplicate category '{}'", line, name)
            }
            Self::NoCategories => write!(f, "no categories defined"),
        }
    }
}

impl std::error::Error for TaxonomyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_preserves_order() {
        let taxonomy = Taxonomy::parse("Zoo:b,a\nApple:x\n").unwrap();
        let names: Vec<_> = taxonomy.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zoo", "Apple"]);
        assert_eq!(taxonomy.get("Zoo").unwrap().subcategories, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_trims_line_endings_and_blank_lines() {
        let taxonomy = Taxonomy::parse("Food:Groceries,Snacks\r\n\n  \nHome: Rent , Power\n").unwrap();
        assert_eq!(taxonomy.categories().len(), 2);
        assert_eq!(
            taxonomy.get("Food").unwrap().subcategories,
            vec!["Groceries", "Snacks"]
        );
        assert_eq!(taxonomy.get("Home").unwrap().subcategories, vec!["Rent", "Power"]);
    }

    #[test]
    fn test_subcategories_may_repeat_across_categories() {
        let taxonomy = Taxonomy::parse("Food:Other\nTransport:Other\n").unwrap();
        assert_eq!(taxonomy.get("Food").unwrap().subcategories, vec!["Other"]);
        assert_eq!(taxonomy.get("Transport").unwrap().subcategories, vec!["Other"]);
    }

    #[test]
    fn test_rejects_missing_colon() {
        let err = Taxonomy::parse("Food:Groceries\nTransport\n").unwrap_err();
        assert_eq!(err, TaxonomyParseError::MissingColon(2));
    }

    #[test]
    fn test_rejects_empty_names() {
        assert_eq!(
            Taxonomy::parse(":a,b").unwrap_err(),
            TaxonomyParseError::EmptyCategory(1)
        );
        assert!(matches!(
            Taxonomy::parse("Food:").unwrap_err(),
            TaxonomyParseError::EmptySubcategory { line: 1, .. }
        ));
        assert!(matches!(
            Taxonomy::parse("Food:a,,b").unwrap_err(),
            TaxonomyParseError::EmptySubcategory { .. }
        ));
    }

    #[test]
    fn test_rejects_reserved_characters() {
        assert!(matches!(
            Taxonomy::parse("Food:a:b").unwrap_err(),
            TaxonomyParseError::ReservedCharacter { line: 1, .. }
        ));
        assert!(matches!(
            Taxonomy::parse("Fo,od:a").unwrap_err(),
            TaxonomyParseError::ReservedCharacter { .. }
        ));
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let err = Taxonomy::parse("Food:a\nFood:b\n").unwrap_err();
        assert!(matches!(
            err,
            TaxonomyParseError::DuplicateCategory { line: 2, .. }
        ));
    }

    #[test]
    fn test_rejects_empty_file() {
        assert_eq!(
            Taxonomy::parse("\n\n").unwrap_err(),
            TaxonomyParseError::NoCategories
        );
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("cfg"));

        let taxonomy = Taxonomy::load_or_create(&paths).unwrap();

        assert_eq!(
            std::fs::read_to_string(paths.settings_file()).unwrap(),
            DEFAULT_TAXONOMY
        );
        assert_eq!(taxonomy.categories().len(), 2);
        for category in taxonomy.categories() {
            assert!((2..=3).contains(&category.subcategories.len()));
        }
    }

    #[test]
    fn test_load_or_create_keeps_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "Home:Rent\n").unwrap();

        let taxonomy = Taxonomy::load_or_create(&paths).unwrap();

        assert_eq!(taxonomy.categories().len(), 1);
        assert!(taxonomy.contains("Home"));
        assert!(!taxonomy.contains("Food"));
    }

    #[test]
    fn test_load_malformed_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "no colon here\n").unwrap();

        let err = Taxonomy::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
        assert!(err.to_string().contains("line 1"));
    }
}
