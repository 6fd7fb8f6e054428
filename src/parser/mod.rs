/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the order-protocol parser.
 *
 * This module wires together the parser sub-modules:
 *   - Core parse driver and line classification
 *   - Dish-line grammar and inventory coupling
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

/// Core parser orchestration:
/// - Owns the `Parser` state struct
/// - Exposes the main `parse(lines, inventory)` entry point
/// - Header, comanda and line classification
pub mod parser;

/// Dish-line parsing:
/// - quoted dish name extraction
/// - `+"…"` / `-"…"` modification scanning
/// - availability / legality / slot checks and the stock decrement
mod dish;

/// Re-export the public parse entry point so callers can use:
/// `comanda::parser::parse(...)`
pub use parser::parse;
