//! The book catalog: immutable reference data describing which textbooks and
//! projects can be chosen in each axis.

use std::collections::{HashMap, HashSet};

use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    serde::json::serde_json,
    Build, Rocket,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::model::common::Axis;

/// The catalog shipped with the server, used unless `catalog_path` is configured.
const DEFAULT_CATALOG: &str = include_str!("../../data/catalog.json");

/// A selectable book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub code: String,
    pub title: String,
    pub publisher: String,
}

/// Books are either regular textbooks or integrating projects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Textbook,
    Project,
}

/// The books available within one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBooks {
    pub textbooks: Vec<Book>,
    pub projects: Vec<Book>,
}

impl AxisBooks {
    /// The books of the given category.
    pub fn category(&self, category: Category) -> &[Book] {
        match category {
            Category::Textbook => &self.textbooks,
            Category::Project => &self.projects,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalog has no entry for axis '{0}'")]
    MissingAxis(Axis),
    #[error("Catalog lists book code {code} more than once in axis '{axis}'")]
    DuplicateCode { axis: Axis, code: String },
}

/// The full catalog, keyed by axis.
#[derive(Debug, Clone)]
pub struct Catalog {
    axes: HashMap<Axis, AxisBooks>,
}

impl Catalog {
    /// Parse a catalog from JSON, checking every axis is present and no code
    /// is repeated within an axis and category.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let axes: HashMap<Axis, AxisBooks> = serde_json::from_str(json)?;
        for axis in Axis::ALL {
            let books = axes.get(&axis).ok_or(CatalogError::MissingAxis(axis))?;
            for category in [Category::Textbook, Category::Project] {
                let mut seen = HashSet::new();
                for book in books.category(category) {
                    if !seen.insert(book.code.as_str()) {
                        return Err(CatalogError::DuplicateCode {
                            axis,
                            code: book.code.clone(),
                        });
                    }
                }
            }
        }
        Ok(Self { axes })
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG)
    }

    /// Load the catalog from the given file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All books of an axis.
    pub fn books(&self, axis: Axis) -> &AxisBooks {
        // Presence of every axis is checked on construction.
        &self.axes[&axis]
    }

    /// Resolve a code to its book, searching axes in report order.
    pub fn book(&self, code: &str) -> Option<&Book> {
        Axis::ALL.into_iter().find_map(|axis| {
            let books = self.books(axis);
            books
                .textbooks
                .iter()
                .chain(books.projects.iter())
                .find(|book| book.code == code)
        })
    }

    /// Is `code` a book of the given category within the given axis?
    pub fn contains(&self, axis: Axis, category: Category, code: &str) -> bool {
        self.books(axis)
            .category(category)
            .iter()
            .any(|book| book.code == code)
    }
}

/// A fairing that loads the catalog and places it into managed state.
/// This fairing depends on the [`Config`] being available in managed state,
/// and so must be attached after the fairing responsible for that.
pub struct CatalogFairing;

#[rocket::async_trait]
impl Fairing for CatalogFairing {
    fn info(&self) -> Info {
        Info {
            name: "Book Catalog",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let path = match rocket.state::<Config>() {
            Some(config) => config.catalog_path().map(str::to_owned),
            None => {
                error!("Config was not available when loading the catalog");
                return Err(rocket);
            }
        };

        let catalog = match path {
            Some(ref path) => {
                info!("Loading catalog from {path}");
                Catalog::from_file(path)
            }
            None => {
                info!("Loading built-in catalog");
                Catalog::builtin()
            }
        };
        match catalog {
            Ok(catalog) => Ok(rocket.manage(catalog)),
            Err(e) => {
                error!("{e}");
                Err(rocket)
            }
        }
    }
}
