/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * Core Order Parser Entry Point
 *
 * This file defines the `Parser` state struct and the public `parse()`
 * driver that turns a sequence of trimmed, non-empty text lines into a
 * validated `Order`.
 *
 * Parsing is a single forward pass with no backtracking, and it is
 * coupled to the live inventory: every dish line is checked against the
 * catalog as it is read, and committing a dish decrements its stock.
 * The first error is terminal for the whole parse; decrements already
 * applied before the failing line stay applied.
 *
 * The dish-line grammar lives in `dish.rs`; this file handles the header,
 * comanda lines, and line classification.
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

use regex::Regex;

use crate::error::{OrderError, Result};
use crate::inventory::Inventory;
use crate::models::{Comanda, Order, Slot};
use crate::validation::Validate;

/// The order-protocol parser.
///
/// Holds the order under construction, the index of the comanda currently
/// being filled, and a borrowed handle to the shared inventory. One value
/// of this struct serves exactly one parse call.
pub(crate) struct Parser<'a> {
    /// Catalog consulted for every dish line and decremented on commit.
    pub(crate) inventory: &'a Inventory,

    /// Order under construction.
    pub(crate) order: Order,

    /// Index into `order.comande` of the comanda currently open, if any.
    pub(crate) current: Option<usize>,

    /// First `"…"` segment of a dish line: the dish name. No escapes.
    pub(crate) dish_name_re: Regex,

    /// Every `+"…"` / `-"…"` occurrence on a dish line: a modification.
    pub(crate) modification_re: Regex,
}

/// Parses a full order from its text lines.
///
/// `lines` is expected to contain trimmed, non-empty lines (the caller
/// strips blanks when reading the file), but empty lines are re-skipped
/// defensively. Line 0 must be the `ORDINE` header; every following line
/// is either a `COMANDA` line or a dish line belonging to the currently
/// open comanda.
///
/// On success the returned `Order` satisfies all structural invariants.
/// On failure the first error is returned and no order is produced,
/// but stock decrements performed before the failing line are not rolled
/// back.
///
/// # Example
/// ```
/// use comanda::{parse, Inventory};
///
/// let inventory = Inventory::default_menu();
/// let lines = [
///     "ORDINE 5 21/06/2024",
///     "COMANDA 1",
///     "PRIMO \"pasta al pomodoro\" +\"formaggio\"",
/// ];
/// let order = parse(&lines, &inventory).unwrap();
/// assert_eq!(order.table, 5);
/// ```
pub fn parse<S: AsRef<str>>(lines: &[S], inventory: &Inventory) -> Result<Order> {
    if lines.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    let mut parser = Parser::new(inventory);
    parser.header(lines[0].as_ref())?;

    for line in &lines[1..] {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        parser.line(line)?;
    }

    parser.finish()
}

impl<'a> Parser<'a> {
    pub(crate) fn new(inventory: &'a Inventory) -> Self {
        Self {
            inventory,
            order: Order::new(0, ""),
            current: None,
            dish_name_re: Regex::new(r#""([^"]+)""#).unwrap(),
            modification_re: Regex::new(r#"([+-])"([^"]+)""#).unwrap(),
        }
    }

    /// Parses the header line: `ORDINE <table> <date>`.
    ///
    /// The first three whitespace-separated tokens are authoritative;
    /// trailing tokens are tolerated. The date is shape-checked only
    /// (`DD/MM/YYYY`), never calendar-checked.
    fn header(&mut self, line: &str) -> Result<()> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 || parts[0] != "ORDINE" {
            return Err(OrderError::Syntax {
                line: line.to_string(),
                detail: "the header must be in the form 'ORDINE <table> <date>'".to_string(),
            });
        }

        self.order.table = parts[1].parse().map_err(|_| OrderError::InvalidNumber {
            context: "tavolo".to_string(),
            value: parts[1].to_string(),
        })?;

        let date = parts[2];
        let date_re = Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap();
        if !date_re.is_match(date) {
            return Err(OrderError::DateFormat {
                value: date.to_string(),
            });
        }
        self.order.date = date.to_string();

        Ok(())
    }

    /// Classifies and parses one body line by its first token.
    fn line(&mut self, line: &str) -> Result<()> {
        // `line` is non-empty here, so a first token always exists.
        let first = line.split_whitespace().next().unwrap_or_default();

        if first == "COMANDA" {
            return self.comanda(line);
        }

        match Slot::from_keyword(first) {
            Some(slot) if self.current.is_some() => self.dish(slot, line),
            Some(_) => Err(OrderError::Syntax {
                line: line.to_string(),
                detail: "found a dish with no owning comanda".to_string(),
            }),
            None if self.current.is_some() => Err(OrderError::Syntax {
                line: line.to_string(),
                detail: format!("unrecognized dish type: {first}"),
            }),
            None => Err(OrderError::Syntax {
                line: line.to_string(),
                detail: "found a dish with no owning comanda".to_string(),
            }),
        }
    }

    /// Parses a `COMANDA <number>` line and makes the new comanda current.
    ///
    /// The previously open comanda, if any, is finalized first: it must
    /// have at least one filled slot before the next one may start.
    fn comanda(&mut self, line: &str) -> Result<()> {
        self.close_current()?;

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 || parts[0] != "COMANDA" {
            return Err(OrderError::Syntax {
                line: line.to_string(),
                detail: "the comanda must be in the form 'COMANDA <number>'".to_string(),
            });
        }

        let number = parts[1].parse().map_err(|_| OrderError::InvalidNumber {
            context: "comanda".to_string(),
            value: parts[1].to_string(),
        })?;

        self.order.comande.push(Comanda::new(number));
        self.current = Some(self.order.comande.len() - 1);

        Ok(())
    }

    /// Finalizes the currently open comanda, if any.
    pub(crate) fn close_current(&mut self) -> Result<()> {
        if let Some(index) = self.current {
            self.order.comande[index].validate()?;
        }
        Ok(())
    }

    /// Finalizes the parse: validates the last open comanda and requires
    /// the order to contain at least one comanda overall.
    fn finish(mut self) -> Result<Order> {
        self.close_current()?;

        if self.order.comande.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        Ok(self.order)
    }
}
