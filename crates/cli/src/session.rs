//! The interactive loop: show the catalog, offer the menu, run sales.

use std::io;

use boutique_inventory::{Catalog, SaleOutcome};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::console::Console;

const RULE_WIDTH: usize = 70;

/// A parsed main-menu answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Sell,
    Quit,
    Invalid,
}

impl MenuChoice {
    /// Accepts the menu numbers and the command words, ignoring case and
    /// surrounding whitespace.
    pub fn parse(input: &str) -> MenuChoice {
        match input.trim().to_lowercase().as_str() {
            "1" | "sell" => MenuChoice::Sell,
            "2" | "quit" => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Whether the loop should go round again.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<C> {
    catalog: Catalog,
    console: C,
    store_name: String,
    pause: bool,
}

impl<C: Console> Session<C> {
    pub fn new(catalog: Catalog, console: C, config: &CliConfig) -> Self {
        Self {
            catalog,
            console,
            store_name: config.store_name.clone(),
            pause: config.pause,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs until the user quits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            sections = self.catalog.sections().len(),
            units = self.catalog.total_units(),
            "session started"
        );

        while self.step()? == Flow::Continue {}

        info!(units = self.catalog.total_units(), "session ended");
        Ok(())
    }

    /// One pass: redraw, show the menu, act on the answer.
    pub fn step(&mut self) -> io::Result<Flow> {
        self.render_screen()?;

        let Some(answer) = self.console.read_line("\nSelect an option (1-2): ")? else {
            info!("input closed");
            return Ok(Flow::Exit);
        };

        match MenuChoice::parse(&answer) {
            MenuChoice::Sell => {
                if self.sell()? == Flow::Exit {
                    return Ok(Flow::Exit);
                }
                self.pause("\nPress Enter to return to the menu...")
            }
            MenuChoice::Quit => {
                let rule = "=".repeat(RULE_WIDTH);
                self.console
                    .write_str(&format!("\nThank you for using the system!\n{rule}\n"))?;
                Ok(Flow::Exit)
            }
            MenuChoice::Invalid => {
                debug!(input = %answer.trim(), "invalid menu option");
                self.console.write_str("\nInvalid option.\n")?;
                self.pause("Press Enter to continue...")
            }
        }
    }

    fn render_screen(&mut self) -> io::Result<()> {
        self.console.clear()?;

        let rule = "=".repeat(RULE_WIDTH);
        let screen = format!(
            "\n=== {} ===\n{}\nMain menu:\n{rule}\n1. Make a sale\n2. Quit\n{rule}\n",
            self.store_name,
            self.catalog.render_catalog(),
        );
        self.console.write_str(&screen)
    }

    fn sell(&mut self) -> io::Result<Flow> {
        let Some(name) = self.console.read_line("Item name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.console.read_line("Category (Men/Women): ")? else {
            return Ok(Flow::Exit);
        };
        let (name, category) = (name.trim(), category.trim());

        let outcome = self.catalog.sell(name, category);
        match &outcome {
            SaleOutcome::Sold(item) => {
                info!(item = name, category, outcome = outcome.kind(), stock = item.stock(), "sale attempt")
            }
            _ => info!(item = name, category, outcome = outcome.kind(), "sale attempt"),
        }

        self.console.write_str(&render_outcome(&outcome))?;
        Ok(Flow::Continue)
    }

    fn pause(&mut self, prompt: &str) -> io::Result<Flow> {
        if !self.pause {
            return Ok(Flow::Continue);
        }
        match self.console.read_line(prompt)? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Exit),
        }
    }
}

/// What the user sees after a sell attempt.
pub fn render_outcome(outcome: &SaleOutcome) -> String {
    match outcome {
        SaleOutcome::Sold(item) => {
            let heavy = "=".repeat(RULE_WIDTH);
            let light = "-".repeat(RULE_WIDTH);
            format!("\n{heavy}\nSale completed:\n{light}\n{item}\n{heavy}\n")
        }
        SaleOutcome::OutOfStock => "\nItem out of stock.\n".to_string(),
        SaleOutcome::NotFound => "\nItem not found.\n".to_string(),
    }
}
