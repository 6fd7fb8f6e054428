/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  Closed taxonomy of order errors. Every failure the parser,
 *           the inventory or the validator can report is a variant here,
 *           carrying a stable numeric code and a remediation hint for the
 *           presentation layer.
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

use thiserror::Error;

use crate::models::{Polarity, Slot};

pub type Result<T> = std::result::Result<T, OrderError>;

/// Stable numeric error codes, grouped by range:
/// 1000 validation, 2000 syntax, 3000 modifications.
///
/// Presentation layers branch on these; they must never be renumbered.
pub mod codes {
    /// More than one dish for the same slot in a comanda.
    pub const MULTIPLE_DISHES: u16 = 1001;
    /// Dish missing from the catalog or out of stock.
    pub const DISH_UNAVAILABLE: u16 = 1002;
    /// Comanda with no dishes.
    pub const EMPTY_COMANDA: u16 = 1003;
    /// Order with no comande.
    pub const EMPTY_ORDER: u16 = 1004;

    /// Generic grammar violation.
    pub const SYNTAX: u16 = 2001;
    /// Date not in `DD/MM/YYYY` shape.
    pub const DATE_FORMAT: u16 = 2002;
    /// Table or comanda number not a valid integer.
    pub const INVALID_NUMBER: u16 = 2003;

    /// Modification unknown or with the wrong polarity.
    pub const INVALID_MODIFICATION: u16 = 3001;
}

/// An order processing failure.
///
/// The taxonomy is closed: matching on the variant classifies the error,
/// while [`OrderError::code`] stays available as the stable external
/// identifier. Note that some conditions share a code (a missing dish and
/// a sold-out dish are both `DISH_UNAVAILABLE` to the outside) while the
/// variants keep them distinct in-process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("attempt to order more than one {slot} in comanda {comanda}")]
    MultipleDishes { slot: Slot, comanda: i32 },

    #[error("dish '{name}' is not on the menu")]
    UnknownDish { name: String },

    #[error("dish '{name}' is not available in the requested quantity")]
    DishSoldOut { name: String, remaining: i32 },

    #[error("comanda {number} contains no dishes")]
    EmptyComanda { number: i32 },

    #[error("the order contains no comande")]
    EmptyOrder,

    #[error("syntax error at line: '{line}'")]
    Syntax { line: String, detail: String },

    #[error("invalid date format: '{value}'")]
    DateFormat { value: String },

    #[error("invalid {context} number: '{value}'")]
    InvalidNumber { context: String, value: String },

    #[error("modification '{polarity}{item}' is not allowed for dish '{dish}'")]
    UnknownModification {
        dish: String,
        polarity: Polarity,
        item: String,
    },

    #[error("modification '{polarity}{item}' is not allowed for dish '{dish}'")]
    DisallowedPolarity {
        dish: String,
        polarity: Polarity,
        item: String,
    },
}

impl OrderError {
    /// The stable numeric code for this error (see [`codes`]).
    pub fn code(&self) -> u16 {
        match self {
            OrderError::MultipleDishes { .. } => codes::MULTIPLE_DISHES,
            OrderError::UnknownDish { .. } | OrderError::DishSoldOut { .. } => {
                codes::DISH_UNAVAILABLE
            }
            OrderError::EmptyComanda { .. } => codes::EMPTY_COMANDA,
            OrderError::EmptyOrder => codes::EMPTY_ORDER,
            OrderError::Syntax { .. } => codes::SYNTAX,
            OrderError::DateFormat { .. } => codes::DATE_FORMAT,
            OrderError::InvalidNumber { .. } => codes::INVALID_NUMBER,
            OrderError::UnknownModification { .. } | OrderError::DisallowedPolarity { .. } => {
                codes::INVALID_MODIFICATION
            }
        }
    }

    /// A short hint telling the user how to fix the problem.
    pub fn remediation(&self) -> String {
        match self {
            OrderError::MultipleDishes { slot, comanda } => format!(
                "comanda {comanda} already has a {slot}; remove one of the dishes \
                 or move it to a different comanda"
            ),
            OrderError::UnknownDish { .. } => {
                "check the current menu for the dishes on offer".to_string()
            }
            OrderError::DishSoldOut { remaining, .. } => {
                if *remaining > 0 {
                    format!("only {remaining} portions of this dish remain")
                } else {
                    "the dish is sold out for today".to_string()
                }
            }
            OrderError::EmptyComanda { .. } => {
                "add at least one dish (primo, secondo or contorno) to the comanda".to_string()
            }
            OrderError::EmptyOrder => "add at least one comanda to the order".to_string(),
            OrderError::Syntax { detail, .. } => detail.clone(),
            OrderError::DateFormat { .. } => {
                "the correct date format is DD/MM/YYYY".to_string()
            }
            OrderError::InvalidNumber { context, .. } => {
                format!("the {context} value must be a positive integer")
            }
            OrderError::UnknownModification { item, .. } => {
                format!("changes to '{item}' are not available for this dish")
            }
            OrderError::DisallowedPolarity { polarity, item, .. } => {
                let verb = match polarity {
                    Polarity::Add => "add",
                    Polarity::Remove => "remove",
                };
                format!("it is not possible to {verb} '{item}' for this dish")
            }
        }
    }

    /// Full single-line report: `[error 2002] invalid date format: '...'. <hint>`.
    pub fn report(&self) -> String {
        format!("[error {}] {}. {}", self.code(), self, self.remediation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_stay_stable() {
        let sold_out = OrderError::DishSoldOut {
            name: "insalata".into(),
            remaining: 0,
        };
        let unknown = OrderError::UnknownDish {
            name: "lasagna".into(),
        };
        assert_eq!(sold_out.code(), 1002);
        assert_eq!(unknown.code(), 1002);
        assert_eq!(OrderError::EmptyOrder.code(), 1004);
        assert_eq!(
            OrderError::EmptyComanda { number: 2 }.code(),
            codes::EMPTY_COMANDA
        );
        assert_eq!(
            OrderError::DateFormat {
                value: "2024-06-21".into()
            }
            .code(),
            2002
        );
        assert_eq!(
            OrderError::DisallowedPolarity {
                dish: "pasta al pomodoro".into(),
                polarity: Polarity::Remove,
                item: "formaggio".into(),
            }
            .code(),
            3001
        );
    }

    #[test]
    fn syntax_remediation_is_the_detail() {
        let err = OrderError::Syntax {
            line: "ORDINE".into(),
            detail: "the header must be in the form 'ORDINE <table> <date>'".into(),
        };
        assert_eq!(
            err.remediation(),
            "the header must be in the form 'ORDINE <table> <date>'"
        );
    }

    #[test]
    fn sold_out_remediation_mentions_remaining_portions() {
        let err = OrderError::DishSoldOut {
            name: "Bistecca".into(),
            remaining: 2,
        };
        assert!(err.remediation().contains("2 portions"));
    }

    #[test]
    fn report_carries_code_message_and_hint() {
        let report = OrderError::EmptyOrder.report();
        assert!(report.starts_with("[error 1004]"));
        assert!(report.contains("no comande"));
        assert!(report.contains("add at least one comanda"));
    }
}
