/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     models.rs
 * Purpose:  Data model for a parsed order: Order, Comanda, Dish,
 *           Modification, and the Slot/Polarity vocabulary shared by the
 *           parser, the inventory and the renderers.
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

use std::fmt;

use serde::Serialize;

/// Direction of a dish modification.
///
/// Written on the wire as a sign prefix: `+"formaggio"` asks to add
/// an item, `-"basilico"` asks to remove one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    /// `+`: the item is added to the dish.
    #[serde(rename = "+")]
    Add,

    /// `-`: the item is removed from the dish.
    #[serde(rename = "-")]
    Remove,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Add => write!(f, "+"),
            Polarity::Remove => write!(f, "-"),
        }
    }
}

/// One of the three dish positions a comanda can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// First course (`PRIMO`).
    Starter,
    /// Main course (`SECONDO`).
    Main,
    /// Side dish (`CONTORNO`).
    Side,
}

impl Slot {
    /// Maps a protocol keyword (`PRIMO` / `SECONDO` / `CONTORNO`) to its
    /// slot, or `None` for any other token.
    pub fn from_keyword(token: &str) -> Option<Slot> {
        match token {
            "PRIMO" => Some(Slot::Starter),
            "SECONDO" => Some(Slot::Main),
            "CONTORNO" => Some(Slot::Side),
            _ => None,
        }
    }

    /// The protocol keyword for this slot.
    pub fn keyword(&self) -> &'static str {
        match self {
            Slot::Starter => "PRIMO",
            Slot::Main => "SECONDO",
            Slot::Side => "CONTORNO",
        }
    }

    /// Human-readable label used by the formatter.
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Starter => "Primo",
            Slot::Main => "Secondo",
            Slot::Side => "Contorno",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single requested change to a dish.
///
/// Created while parsing a dish line and owned by the containing `Dish`;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modification {
    pub polarity: Polarity,
    pub item: String,
}

/// A named menu item as ordered, with its modifications in order of
/// appearance on the dish line.
///
/// Duplicate or contradictory modifications are kept as written; the
/// parser records what the customer asked, it does not reconcile it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    pub name: String,
    pub modifications: Vec<Modification>,
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifications: Vec::new(),
        }
    }
}

/// One numbered grouping within an order, holding at most one dish
/// per slot.
///
/// Comanda numbers are taken as written: they are not required to be
/// unique or sequential across an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comanda {
    pub number: i32,
    pub starter: Option<Dish>,
    pub main: Option<Dish>,
    pub side: Option<Dish>,
}

impl Comanda {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            starter: None,
            main: None,
            side: None,
        }
    }

    /// The dish currently occupying `slot`, if any.
    pub fn slot(&self, slot: Slot) -> Option<&Dish> {
        match slot {
            Slot::Starter => self.starter.as_ref(),
            Slot::Main => self.main.as_ref(),
            Slot::Side => self.side.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut Option<Dish> {
        match slot {
            Slot::Starter => &mut self.starter,
            Slot::Main => &mut self.main,
            Slot::Side => &mut self.side,
        }
    }

    /// True when no slot has been filled yet.
    pub fn is_empty(&self) -> bool {
        self.starter.is_none() && self.main.is_none() && self.side.is_none()
    }
}

/// The whole request for one table: header data plus its comande.
///
/// Produced by the parser and immutable thereafter; any `Order` handed
/// to the formatter or converter already satisfies the structural
/// invariants (at least one comanda, each with at least one dish).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub table: i32,

    /// Date as written in the header, `DD/MM/YYYY`. Only the shape is
    /// checked; `31/02/2024` is accepted.
    pub date: String,

    pub comande: Vec<Comanda>,
}

impl Order {
    pub fn new(table: i32, date: impl Into<String>) -> Self {
        Self {
            table,
            date: date.into(),
            comande: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keyword_round_trip() {
        for slot in [Slot::Starter, Slot::Main, Slot::Side] {
            assert_eq!(Slot::from_keyword(slot.keyword()), Some(slot));
        }
        assert_eq!(Slot::from_keyword("DOLCE"), None);
        assert_eq!(Slot::from_keyword("primo"), None);
    }

    #[test]
    fn polarity_serializes_as_sign() {
        assert_eq!(serde_json::to_string(&Polarity::Add).unwrap(), "\"+\"");
        assert_eq!(serde_json::to_string(&Polarity::Remove).unwrap(), "\"-\"");
    }

    #[test]
    fn comanda_slot_accessors() {
        let mut comanda = Comanda::new(4);
        assert!(comanda.is_empty());

        *comanda.slot_mut(Slot::Main) = Some(Dish::new("Bistecca"));
        assert!(!comanda.is_empty());
        assert_eq!(comanda.slot(Slot::Main).unwrap().name, "Bistecca");
        assert!(comanda.slot(Slot::Starter).is_none());
    }
}
