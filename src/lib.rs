/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root. Wires the modules together and re-exports the
 *           public surface.
 *
 * Pipeline:
 * ```text
 * Text lines → Parser (+ Inventory checks/decrements) → Order → Formatter / Converter
 * ```
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

/// Closed error taxonomy with stable numeric codes.
pub mod error;

/// Order data model: `Order`, `Comanda`, `Dish`, `Modification`.
pub mod models;

/// Shared dish catalog with stock and modification rules.
pub mod inventory;

/// Line-oriented order parser, coupled to the inventory.
pub mod parser;

/// Structural completeness validation, independent of the inventory.
pub mod validation;

/// Human-readable rendering.
pub mod formatter;

/// Machine-readable (JSON) rendering.
pub mod converter;

pub use error::{codes, OrderError, Result};
pub use inventory::{Entry, Inventory};
pub use models::{Comanda, Dish, Modification, Order, Polarity, Slot};
pub use parser::parse;
pub use validation::Validate;
