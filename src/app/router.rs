//! Static screen table for the web front end.
//!
//! The router never calls the backend. It only answers "which screen lives at
//! this path", and records which API modules that screen is expected to talk
//! to, so the presentation layer and this crate agree on the wiring.

use crate::utils::error::{KnotError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Dashboard,
    Query,
    Fto,
    Corporate,
    Landscape,
    Patents,
    Validity,
}

impl Screen {
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Query => "query",
            Screen::Fto => "fto",
            Screen::Corporate => "corporate",
            Screen::Landscape => "landscape",
            Screen::Patents => "patents",
            Screen::Validity => "validity",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiModule {
    Corporate,
    Fto,
    Health,
    Landscape,
    Patents,
    Products,
    Query,
    Validity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub screen: Screen,
    /// Component that renders the screen.
    pub component: &'static str,
    pub modules: &'static [ApiModule],
}

pub static ROUTES: [RouteEntry; 7] = [
    RouteEntry {
        path: "/",
        screen: Screen::Dashboard,
        component: "DashboardView",
        modules: &[ApiModule::Health],
    },
    RouteEntry {
        path: "/query",
        screen: Screen::Query,
        component: "QueryView",
        modules: &[ApiModule::Query],
    },
    RouteEntry {
        path: "/fto",
        screen: Screen::Fto,
        component: "FTOView",
        modules: &[ApiModule::Fto],
    },
    RouteEntry {
        path: "/corporate",
        screen: Screen::Corporate,
        component: "CorporateView",
        modules: &[ApiModule::Corporate],
    },
    RouteEntry {
        path: "/landscape",
        screen: Screen::Landscape,
        component: "LandscapeView",
        modules: &[ApiModule::Landscape],
    },
    RouteEntry {
        path: "/patents",
        screen: Screen::Patents,
        component: "PatentsView",
        modules: &[ApiModule::Patents, ApiModule::Products],
    },
    RouteEntry {
        path: "/validity",
        screen: Screen::Validity,
        component: "ValidityView",
        modules: &[ApiModule::Validity],
    },
];

/// Exact-match lookup over the built-in table.
pub fn resolve(path: &str) -> Result<&'static RouteEntry> {
    ViewRouter::new().resolve(path)
}

/// Read-only view over a route table with unique paths.
#[derive(Debug, Clone, Copy)]
pub struct ViewRouter {
    entries: &'static [RouteEntry],
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self { entries: &ROUTES }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a router over a custom table, rejecting duplicate paths.
    pub fn with_routes(entries: &'static [RouteEntry]) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.path) {
                return Err(KnotError::ConfigError {
                    message: format!("Duplicate route path '{}'", entry.path),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn resolve(&self, path: &str) -> Result<&'static RouteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .ok_or_else(|| KnotError::NotFound {
                path: path.to_string(),
            })
    }

    pub fn path_for(&self, screen: Screen) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.screen == screen)
            .map(|entry| entry.path)
    }

    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }
}
