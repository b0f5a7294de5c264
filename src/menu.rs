// src/menu.rs

use std::collections::BTreeMap;

/// One dish as displayed on the plan: a short dish-type tag, the
/// emphasized dish name, and whatever trails it (sides, allergens).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub category: String,
    pub title: String,
    /// Absent when the description holds nothing beyond the title.
    pub details: Option<String>,
}

/// Everything one canteen table yields: the date label as printed in the
/// document (the site sometimes omits it) and the dishes in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanteenMenu {
    pub date: Option<String>,
    pub items: Vec<MenuItem>,
}

/// Canteen name → menu, built fresh per parse. A `BTreeMap` keeps the
/// names sorted for listings and resolver determinism, and `insert`
/// makes a repeated canteen name last-write-wins.
pub type MenuCatalog = BTreeMap<String, CanteenMenu>;
