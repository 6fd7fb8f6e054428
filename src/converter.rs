/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     converter.rs
 * Purpose:  Machine-readable rendering of a completed order.
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

use crate::models::Order;

/// Renders an order as pretty-printed JSON.
///
/// Serialization failures are not part of the order-error taxonomy; they
/// surface as `serde_json` errors for the caller to report.
pub fn to_json(order: &Order) -> serde_json::Result<String> {
    serde_json::to_string_pretty(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comanda, Dish, Modification, Polarity, Slot};

    #[test]
    fn json_carries_the_whole_structure() {
        let mut comanda = Comanda::new(1);
        let mut dish = Dish::new("pasta al pomodoro");
        dish.modifications.push(Modification {
            polarity: Polarity::Add,
            item: "formaggio".into(),
        });
        *comanda.slot_mut(Slot::Starter) = Some(dish);

        let mut order = Order::new(5, "21/06/2024");
        order.comande.push(comanda);

        let json = to_json(&order).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["table"], 5);
        assert_eq!(value["date"], "21/06/2024");
        assert_eq!(value["comande"][0]["number"], 1);
        assert_eq!(
            value["comande"][0]["starter"]["name"],
            "pasta al pomodoro"
        );
        assert_eq!(
            value["comande"][0]["starter"]["modifications"][0]["polarity"],
            "+"
        );
        // Unfilled slots are rendered explicitly as null.
        assert!(value["comande"][0]["main"].is_null());
    }
}
