//! CLI command implementations

use crate::error::CliResult;
use crate::output::OutputFormat;
use clap::Subcommand;
use sixdot_core::{DotPattern, SymbolTable};

pub mod generate_config;
pub mod translate;
pub mod validate;

pub use generate_config::GenerateConfigArgs;
pub use translate::TranslateArgs;
pub use validate::ValidateArgs;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate Spanish text to six-dot Braille
    Translate(TranslateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(GenerateConfigArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Translate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List every character with a Braille cell
    Symbols,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) -> CliResult<()> {
        print!("{}", self.render());
        Ok(())
    }

    /// The listing as text
    pub fn render(&self) -> String {
        match self {
            ListCommands::Symbols => {
                let table = SymbolTable::spanish();
                let mut out = format!("Braille symbols ({} entries):\n", table.len());
                out.push_str(&symbol_row("prefix", table.number_prefix()));
                for (ch, code) in table.entries() {
                    out.push_str(&symbol_row(&symbol_name(ch), DotPattern::from_code(code)));
                }
                out.push_str(&symbol_row("capital", table.capital_prefix()));
                out
            }
            ListCommands::Formats => {
                let mut out = String::from("Available output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!(
                        "  {:<10} - {}\n",
                        format.as_str(),
                        format.description()
                    ));
                }
                out
            }
        }
    }
}

fn symbol_row(name: &str, cell: DotPattern) -> String {
    let code = if cell.is_blank() {
        "0".to_string()
    } else {
        cell.pattern_code()
    };
    format!("  {name:<8} {code:<8} {cell}\n")
}

fn symbol_name(ch: char) -> String {
    match ch {
        ' ' => "space".to_string(),
        other => other.to_string(),
    }
}
