/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     formatter.rs
 * Purpose:  Human-readable rendering of a completed order, for printing
 *           on a terminal or a kitchen ticket.
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

use std::fmt::Write;

use crate::models::{Comanda, Dish, Modification, Order, Slot};

/// Renders an order as an indented, human-readable block.
///
/// ```text
/// Order for table 5, date 21/06/2024
///   Comanda 1:
///     Primo: pasta al pomodoro [{+ formaggio}]
/// ```
pub fn format_order(order: &Order) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Order for table {}, date {}",
        order.table, order.date
    );

    for comanda in &order.comande {
        format_comanda(&mut output, comanda);
    }

    output
}

fn format_comanda(output: &mut String, comanda: &Comanda) {
    let _ = writeln!(output, "  Comanda {}:", comanda.number);

    for slot in [Slot::Starter, Slot::Main, Slot::Side] {
        if let Some(dish) = comanda.slot(slot) {
            format_dish(output, slot, dish);
        }
    }
}

fn format_dish(output: &mut String, slot: Slot, dish: &Dish) {
    let _ = writeln!(
        output,
        "    {}: {}{}",
        slot.label(),
        dish.name,
        format_modifications(&dish.modifications)
    );
}

fn format_modifications(modifications: &[Modification]) -> String {
    if modifications.is_empty() {
        return String::new();
    }

    let entries: Vec<String> = modifications
        .iter()
        .map(|m| format!("{{{} {}}}", m.polarity, m.item))
        .collect();

    format!(" [{}]", entries.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Polarity;

    #[test]
    fn formats_order_with_modifications() {
        let mut comanda = Comanda::new(1);
        let mut dish = Dish::new("pasta al pomodoro");
        dish.modifications.push(Modification {
            polarity: Polarity::Add,
            item: "formaggio".into(),
        });
        dish.modifications.push(Modification {
            polarity: Polarity::Remove,
            item: "basilico".into(),
        });
        *comanda.slot_mut(Slot::Starter) = Some(dish);
        *comanda.slot_mut(Slot::Side) = Some(Dish::new("insalata"));

        let mut order = Order::new(5, "21/06/2024");
        order.comande.push(comanda);

        let text = format_order(&order);
        assert_eq!(
            text,
            "Order for table 5, date 21/06/2024\n\
             \x20 Comanda 1:\n\
             \x20   Primo: pasta al pomodoro [{+ formaggio} {- basilico}]\n\
             \x20   Contorno: insalata\n"
        );
    }

    #[test]
    fn slots_are_rendered_in_course_order() {
        let mut comanda = Comanda::new(2);
        *comanda.slot_mut(Slot::Side) = Some(Dish::new("insalata"));
        *comanda.slot_mut(Slot::Main) = Some(Dish::new("Bistecca"));

        let mut order = Order::new(9, "01/01/2025");
        order.comande.push(comanda);

        let text = format_order(&order);
        let secondo = text.find("Secondo").unwrap();
        let contorno = text.find("Contorno").unwrap();
        assert!(secondo < contorno);
    }
}
