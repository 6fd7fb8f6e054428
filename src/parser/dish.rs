/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     parser/dish.rs
 * Purpose:  Dish-line grammar and its coupling to the inventory.
 *
 * A dish line is `<PRIMO|SECONDO|CONTORNO> "<dish>" [<+|-> "<item>"]*`.
 * The checks run in a fixed order that callers rely on for error
 * precedence: availability first, then each modification in textual
 * order, then slot occupancy, then the commit, then the stock decrement.
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

use crate::error::{OrderError, Result};
use crate::models::{Dish, Modification, Polarity, Slot};
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// Parses a dish line and attaches the dish to `slot` of the current
    /// comanda.
    ///
    /// The dish name is the content of the first `"…"` segment after the
    /// slot keyword. Modifications are every `+"…"` / `-"…"` occurrence
    /// anywhere in the remainder, kept in order of appearance, including
    /// duplicates and contradictions, which are recorded as written.
    ///
    /// A failed check aborts the whole parse; nothing on this line is
    /// committed in that case. Once all checks pass the dish is placed
    /// and its stock decremented by one.
    pub(crate) fn dish(&mut self, slot: Slot, line: &str) -> Result<()> {
        let Some(index) = self.current else {
            return Err(OrderError::Syntax {
                line: line.to_string(),
                detail: "found a dish with no owning comanda".to_string(),
            });
        };

        // Split off the slot keyword; everything after it is scanned
        // by regex, so extra whitespace is harmless.
        let Some((_, rest)) = line.split_once(char::is_whitespace) else {
            return Err(OrderError::Syntax {
                line: line.to_string(),
                detail: "the dish line format is not valid".to_string(),
            });
        };

        let name = self
            .dish_name_re
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| OrderError::Syntax {
                line: line.to_string(),
                detail: "the dish name must be quoted".to_string(),
            })?;

        self.inventory.check_availability(name)?;

        let mut dish = Dish::new(name);

        for caps in self.modification_re.captures_iter(rest) {
            // Structurally incomplete matches are skipped, not errors.
            let (Some(sign), Some(item)) = (caps.get(1), caps.get(2)) else {
                continue;
            };

            let polarity = match sign.as_str() {
                "+" => Polarity::Add,
                _ => Polarity::Remove,
            };
            let item = item.as_str();

            self.inventory.check_modification(name, polarity, item)?;

            dish.modifications.push(Modification {
                polarity,
                item: item.to_string(),
            });
        }

        let comanda = &mut self.order.comande[index];
        if comanda.slot(slot).is_some() {
            return Err(OrderError::MultipleDishes {
                slot,
                comanda: comanda.number,
            });
        }
        *comanda.slot_mut(slot) = Some(dish);

        self.inventory.decrement(name)
    }
}
