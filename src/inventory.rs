/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     inventory.rs
 * Purpose:  Shared dish catalog: remaining stock per dish plus the table
 *           of permitted modifications. Consulted by the parser for every
 *           dish line and decremented on every committed dish.
 *
 * License:
 * This file is part of the COMANDA project.
 *
 * COMANDA is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{OrderError, Result};
use crate::models::Polarity;

/// Remaining portions at or below which a decrement logs a low-stock
/// advisory. The advisory is observational only, never an error.
const LOW_STOCK_THRESHOLD: i32 = 3;

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,

    /// Portions left. Not validated on insert: a caller may seed a
    /// negative quantity, which simply reads as sold out.
    pub remaining: i32,

    /// Permitted modifications. The value is the polarity a request for
    /// that item must use; items absent from the map are illegal for
    /// this dish.
    pub rules: HashMap<String, Polarity>,
}

/// The dish catalog shared by every parse.
///
/// Owned explicitly by the caller (typically behind an `Arc`) and passed
/// by reference into each parse, so tests can build isolated catalogs.
/// Interior mutability follows a readers-writer discipline: availability
/// and modification checks take the read lock and may run concurrently,
/// while catalog edits and decrements take the write lock, making each
/// decrement an atomic read-modify-write.
#[derive(Debug, Default)]
pub struct Inventory {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seeded menu used by the command-line binary.
    pub fn default_menu() -> Self {
        let inv = Self::new();

        // Primi
        inv.add_entry(
            "pasta al pomodoro",
            10,
            HashMap::from([
                ("formaggio".to_string(), Polarity::Add),
                ("basilico".to_string(), Polarity::Remove),
                ("pomodoro".to_string(), Polarity::Remove),
            ]),
        );
        inv.add_entry(
            "risotto ai funghi",
            5,
            HashMap::from([
                ("parmigiano".to_string(), Polarity::Add),
                ("funghi".to_string(), Polarity::Remove),
                ("burro".to_string(), Polarity::Remove),
            ]),
        );

        // Secondi
        inv.add_entry(
            "Bistecca",
            8,
            HashMap::from([
                ("Salsa barbecue".to_string(), Polarity::Add),
                ("pepe".to_string(), Polarity::Add),
                ("sale".to_string(), Polarity::Remove),
            ]),
        );

        // Contorni
        inv.add_entry(
            "insalata",
            15,
            HashMap::from([
                ("aceto balsamico".to_string(), Polarity::Add),
                ("pomodorini".to_string(), Polarity::Add),
                ("olio".to_string(), Polarity::Remove),
            ]),
        );

        inv
    }

    /// Inserts or overwrites a catalog entry. The quantity sign is not
    /// checked.
    pub fn add_entry(
        &self,
        name: impl Into<String>,
        remaining: i32,
        rules: HashMap<String, Polarity>,
    ) {
        let name = name.into();
        let mut entries = self.entries.write().expect("inventory lock poisoned");
        entries.insert(
            name.clone(),
            Entry {
                name,
                remaining,
                rules,
            },
        );
    }

    /// Read-only snapshot of an entry.
    pub fn lookup(&self, name: &str) -> Option<Entry> {
        let entries = self.entries.read().expect("inventory lock poisoned");
        entries.get(name).cloned()
    }

    /// Checks that `name` exists in the catalog and has stock left.
    pub fn check_availability(&self, name: &str) -> Result<()> {
        let entries = self.entries.read().expect("inventory lock poisoned");
        let entry = entries.get(name).ok_or_else(|| OrderError::UnknownDish {
            name: name.to_string(),
        })?;

        if entry.remaining <= 0 {
            return Err(OrderError::DishSoldOut {
                name: name.to_string(),
                remaining: 0,
            });
        }

        Ok(())
    }

    /// Checks that the requested modification is legal for `dish`:
    /// the item must appear in the dish's rules, with the requested
    /// polarity matching the recorded one.
    pub fn check_modification(&self, dish: &str, polarity: Polarity, item: &str) -> Result<()> {
        let entries = self.entries.read().expect("inventory lock poisoned");
        let entry = entries.get(dish).ok_or_else(|| OrderError::UnknownDish {
            name: dish.to_string(),
        })?;

        let required = entry
            .rules
            .get(item)
            .ok_or_else(|| OrderError::UnknownModification {
                dish: dish.to_string(),
                polarity,
                item: item.to_string(),
            })?;

        if *required != polarity {
            return Err(OrderError::DisallowedPolarity {
                dish: dish.to_string(),
                polarity,
                item: item.to_string(),
            });
        }

        Ok(())
    }

    /// Consumes one portion of `name`.
    ///
    /// Fails under the same conditions as [`Inventory::check_availability`];
    /// the read-check and the write happen under a single write lock so two
    /// concurrent parses can never both spend the last portion.
    pub fn decrement(&self, name: &str) -> Result<()> {
        let mut entries = self.entries.write().expect("inventory lock poisoned");
        let entry = entries
            .get_mut(name)
            .ok_or_else(|| OrderError::UnknownDish {
                name: name.to_string(),
            })?;

        if entry.remaining <= 0 {
            return Err(OrderError::DishSoldOut {
                name: name.to_string(),
                remaining: 0,
            });
        }

        entry.remaining -= 1;

        if entry.remaining <= LOW_STOCK_THRESHOLD {
            tracing::warn!(
                dish = %entry.name,
                remaining = entry.remaining,
                "low stock: dish is about to run out"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Inventory {
        let inv = Inventory::new();
        inv.add_entry(
            "pasta al pomodoro",
            2,
            HashMap::from([
                ("formaggio".to_string(), Polarity::Add),
                ("basilico".to_string(), Polarity::Remove),
            ]),
        );
        inv
    }

    #[test]
    fn lookup_returns_a_snapshot() {
        let inv = catalog();
        let entry = inv.lookup("pasta al pomodoro").unwrap();
        assert_eq!(entry.remaining, 2);
        assert_eq!(entry.rules.get("formaggio"), Some(&Polarity::Add));
        assert!(inv.lookup("lasagna").is_none());
    }

    #[test]
    fn availability_distinguishes_missing_from_sold_out() {
        let inv = catalog();
        assert!(inv.check_availability("pasta al pomodoro").is_ok());
        assert_eq!(
            inv.check_availability("lasagna"),
            Err(OrderError::UnknownDish {
                name: "lasagna".into()
            })
        );

        inv.add_entry("trofie al pesto", 0, HashMap::new());
        assert_eq!(
            inv.check_availability("trofie al pesto"),
            Err(OrderError::DishSoldOut {
                name: "trofie al pesto".into(),
                remaining: 0
            })
        );
    }

    #[test]
    fn negative_stock_is_accepted_and_reads_as_sold_out() {
        let inv = Inventory::new();
        inv.add_entry("minestrone", -4, HashMap::new());
        assert_eq!(inv.lookup("minestrone").unwrap().remaining, -4);
        assert!(matches!(
            inv.check_availability("minestrone"),
            Err(OrderError::DishSoldOut { .. })
        ));
    }

    #[test]
    fn modification_rules_are_enforced() {
        let inv = catalog();
        assert!(inv
            .check_modification("pasta al pomodoro", Polarity::Add, "formaggio")
            .is_ok());
        assert!(inv
            .check_modification("pasta al pomodoro", Polarity::Remove, "basilico")
            .is_ok());

        assert!(matches!(
            inv.check_modification("pasta al pomodoro", Polarity::Remove, "formaggio"),
            Err(OrderError::DisallowedPolarity { .. })
        ));
        assert!(matches!(
            inv.check_modification("pasta al pomodoro", Polarity::Add, "peperoncino"),
            Err(OrderError::UnknownModification { .. })
        ));
        assert!(matches!(
            inv.check_modification("lasagna", Polarity::Add, "formaggio"),
            Err(OrderError::UnknownDish { .. })
        ));
    }

    #[test]
    fn decrement_spends_exactly_one_portion_until_exhausted() {
        let inv = catalog();
        assert!(inv.decrement("pasta al pomodoro").is_ok());
        assert_eq!(inv.lookup("pasta al pomodoro").unwrap().remaining, 1);
        assert!(inv.decrement("pasta al pomodoro").is_ok());
        assert_eq!(inv.lookup("pasta al pomodoro").unwrap().remaining, 0);

        assert!(matches!(
            inv.decrement("pasta al pomodoro"),
            Err(OrderError::DishSoldOut { .. })
        ));
        assert_eq!(inv.lookup("pasta al pomodoro").unwrap().remaining, 0);
    }

    #[test]
    fn add_entry_overwrites_existing_entries() {
        let inv = catalog();
        inv.add_entry("pasta al pomodoro", 7, HashMap::new());
        let entry = inv.lookup("pasta al pomodoro").unwrap();
        assert_eq!(entry.remaining, 7);
        assert!(entry.rules.is_empty());
    }
}
