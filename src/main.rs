/*
 * ==========================================================================
 * COMANDA - Restaurant Order Protocol
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line entry point. Reads an order file, parses it
 *           against the default menu, and prints the human-readable and
 *           JSON renditions, or a coded error report with advice.
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

use std::env;
use std::fs;
use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use comanda::{codes, converter, formatter, parse, Inventory, OrderError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "ordine.txt".to_string());

    let lines = match read_order_file(&path) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::error!(%path, %err, "cannot read the order file");
            return ExitCode::FAILURE;
        }
    };

    for (i, line) in lines.iter().enumerate() {
        tracing::debug!(line = i, content = %line, "input");
    }

    let inventory = Inventory::default_menu();

    match parse(&lines, &inventory) {
        Ok(order) => {
            println!("{}", formatter::format_order(&order));

            match converter::to_json(&order) {
                Ok(json) => {
                    println!("JSON format:");
                    println!("{json}");
                }
                Err(err) => {
                    tracing::error!(%err, "JSON conversion failed");
                    return ExitCode::FAILURE;
                }
            }

            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Reads the order file, keeping only non-blank lines.
fn read_order_file(path: &str) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Prints a coded error report plus a suggestion keyed on the code.
fn report_error(err: &OrderError) {
    println!("=== ERROR [{}] ===", err.code());
    println!("Message:  {err}");
    println!("Solution: {}", err.remediation());

    match err.code() {
        codes::DISH_UNAVAILABLE => {
            println!("Tip: check the menu for available alternatives.");
        }
        codes::INVALID_MODIFICATION => {
            println!("Tip: ask the staff about the permitted modifications.");
        }
        codes::SYNTAX => {
            println!("Tip: check the syntax of the order file.");
        }
        _ => {}
    }
}
