//! # Shell
//!
//! Line-oriented front end for the storefront. Each input line is parsed
//! into a [`ShellCommand`] and dispatched to exactly one command.
//!
//! ## Commands
//! ```text
//! catalog | list          show the cards passing the current filter
//! filter <category|all>   select a category button
//! search [text]           set the search box (blank clears it)
//! add <index>             add catalog card <index> to the cart
//! inc <id>                one more of a line item
//! dec <id>                one fewer (the last one removes the row)
//! rm <id>                 remove a line item
//! cart                    print the cart as JSON
//! clear                   empty the cart
//! checkout                check out
//! config                  print the configuration as JSON
//! help                    this text
//! quit | exit             leave
//! ```
//!
//! Cart mutations reply with nothing: the panel, banner and alert come
//! from the presenter.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::Serialize;
use sweetshop_core::{CatalogView, CategoryFilter};
use tracing::debug;

use crate::commands;
use crate::error::{ApiError, ErrorCode};
use crate::state::{CartState, CatalogState, ConfigState};

const HELP: &str = "\
catalog | list          show the cards passing the current filter
filter <category|all>   select a category button
search [text]           set the search box (blank clears it)
add <index>             add catalog card <index> to the cart
inc <id>                one more of a line item
dec <id>                one fewer (the last one removes the row)
rm <id>                 remove a line item
cart                    print the cart as JSON
clear                   empty the cart
checkout                check out
config                  print the configuration as JSON
help                    this text
quit | exit             leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Catalog,
    Filter(CategoryFilter),
    Search(String),
    Add(usize),
    Increase(String),
    Decrease(String),
    Remove(String),
    Cart,
    Clear,
    Checkout,
    Config,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        // Line item ids contain spaces ("Besan Ladoo-0"), so they take the
        // rest of the line
        let id = |name: &str| {
            if rest.is_empty() {
                Err(ApiError::bad_command(format!("usage: {} <id>", name)))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "catalog" | "list" => Ok(ShellCommand::Catalog),
            "filter" => Ok(ShellCommand::Filter(rest.parse().unwrap_or_default())),
            "search" => Ok(ShellCommand::Search(rest.to_string())),
            "add" => rest
                .parse()
                .map(ShellCommand::Add)
                .map_err(|_| ApiError::bad_command("usage: add <index>")),
            "inc" => id("inc").map(ShellCommand::Increase),
            "dec" => id("dec").map(ShellCommand::Decrease),
            "rm" => id("rm").map(ShellCommand::Remove),
            "cart" => Ok(ShellCommand::Cart),
            "clear" => Ok(ShellCommand::Clear),
            "checkout" => Ok(ShellCommand::Checkout),
            "config" => Ok(ShellCommand::Config),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(ApiError::bad_command(format!(
                "unknown command '{}', try 'help'",
                other
            ))),
        }
    }
}

/// What the input loop should do with a line's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellReply {
    Text(String),
    Silent,
    Quit,
}

/// Interactive session state.
#[derive(Debug)]
pub struct Shell {
    cart: CartState,
    catalog: CatalogState,
    config: ConfigState,
    filter: CategoryFilter,
    query: String,
}

impl Shell {
    pub fn new(cart: CartState, catalog: CatalogState, config: ConfigState) -> Self {
        Shell {
            cart,
            catalog,
            config,
            filter: CategoryFilter::All,
            query: String::new(),
        }
    }

    /// Greeting printed once at startup.
    pub fn banner(&self) -> String {
        format!(
            "Welcome to {}! Categories: {}. Type 'help' for commands.",
            self.config.store_name,
            commands::catalog::list_categories(&self.catalog).join(", ")
        )
    }

    /// Runs one input line.
    pub fn execute(&mut self, line: &str) -> ShellReply {
        if line.trim().is_empty() {
            return ShellReply::Silent;
        }

        match line.parse::<ShellCommand>() {
            Ok(command) => {
                debug!(?command, "Shell command");
                self.dispatch(command)
            }
            Err(err) => render_error(&err),
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> ShellReply {
        let filter = self.filter.clone();
        let query = self.query.clone();

        let result = match command {
            ShellCommand::Catalog => self.show_catalog(filter, query),
            ShellCommand::Filter(filter) => self.show_catalog(filter, query),
            ShellCommand::Search(query) => self.show_catalog(filter, query),
            ShellCommand::Add(index) => {
                commands::cart::add_to_cart(&self.catalog, &self.cart, index).map(silent)
            }
            ShellCommand::Increase(id) => {
                commands::cart::increase_quantity(&self.cart, &id).map(silent)
            }
            ShellCommand::Decrease(id) => {
                commands::cart::decrease_quantity(&self.cart, &id).map(silent)
            }
            ShellCommand::Remove(id) => {
                commands::cart::remove_from_cart(&self.cart, &id).map(silent)
            }
            ShellCommand::Cart => Ok(to_json(&commands::cart::get_cart(&self.cart))),
            ShellCommand::Clear => {
                commands::cart::clear_cart(&self.cart);
                Ok(ShellReply::Silent)
            }
            ShellCommand::Checkout => match commands::cart::checkout(&self.cart) {
                Ok(receipt) => Ok(ShellReply::Text(format!(
                    "Receipt {}: {} items, {}",
                    receipt.id, receipt.item_count, receipt.formatted_total
                ))),
                // The alert already told the user
                Err(err) if err.code == ErrorCode::EmptyCart => Ok(ShellReply::Silent),
                Err(err) => Err(err),
            },
            ShellCommand::Config => Ok(to_json(&commands::config::get_config(&self.config))),
            ShellCommand::Help => Ok(ShellReply::Text(HELP.to_string())),
            ShellCommand::Quit => Ok(ShellReply::Quit),
        };

        result.unwrap_or_else(|err| render_error(&err))
    }

    /// Filters the catalog and, if the query was valid, keeps the new
    /// filter and query for later `catalog` calls.
    fn show_catalog(
        &mut self,
        filter: CategoryFilter,
        query: String,
    ) -> Result<ShellReply, ApiError> {
        let view = commands::catalog::search_catalog(&self.catalog, &filter, &query)?;
        self.filter = filter;
        self.query = query;
        Ok(ShellReply::Text(render_catalog(&view)))
    }
}

fn silent<T>(_: T) -> ShellReply {
    ShellReply::Silent
}

fn render_catalog(view: &CatalogView) -> String {
    if view.no_results {
        return "No products found.".to_string();
    }

    let mut text = String::new();
    for card in &view.visible {
        let _ = writeln!(
            text,
            "{:>3}  {:<24} {:<8} {:>9}",
            card.index, card.title, card.category, card.formatted_price
        );
    }
    text.trim_end().to_string()
}

fn render_error(err: &ApiError) -> ShellReply {
    let code = serde_json::to_value(err.code)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default();
    ShellReply::Text(format!("error [{}]: {}", code, err.message))
}

fn to_json<T: Serialize>(value: &T) -> ShellReply {
    match serde_json::to_string_pretty(value) {
        Ok(json) => ShellReply::Text(json),
        Err(e) => ShellReply::Text(format!("error: {}", e)),
    }
}
