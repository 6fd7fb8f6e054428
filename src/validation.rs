/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     validation.rs
 * Purpose:  Structural validation, independent of the inventory: an order
 *           needs at least one comanda, a comanda at least one dish.
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
use crate::models::{Comanda, Dish, Order};

/// Structural completeness check over an already-built value.
///
/// The parser applies these rules inline as it goes; the trait exists so
/// the same rules can be re-asserted on structures built programmatically,
/// without going near the inventory.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for Order {
    fn validate(&self) -> Result<()> {
        if self.comande.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        for comanda in &self.comande {
            comanda.validate()?;
        }

        Ok(())
    }
}

impl Validate for Comanda {
    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(OrderError::EmptyComanda {
                number: self.number,
            });
        }

        Ok(())
    }
}

impl Validate for Dish {
    /// No dish-level rules yet; the hook is here for when there are.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
