//! Surface Config CLI
//!
//! Entry point for the `surface-config` command-line tool. The CLI is an
//! external caller of the resolver: it builds a selector bag from flags
//! (or a raw JSON bag) and prints the three resolved attributes.

use clap::{Parser, Subcommand};
use std::process;
use surface_config::{Resolver, Selectors};

#[derive(Parser)]
#[command(name = "surface-config")]
#[command(about = "Selector-based presentation attribute resolver", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the presentation attributes for a selector bag
    Resolve {
        /// Language selector (locale code, e.g. en-US)
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// Property selector (surface name, e.g. frontpage)
        #[arg(long, short = 'p')]
        property: Option<String>,

        /// Raw JSON selector bag (e.g. '{"language": "en-US"}')
        #[arg(long, conflicts_with_all = ["language", "property"])]
        bag: Option<String>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            language,
            property,
            bag,
            human,
        } => {
            run_resolve(language, property, bag, human);
        }
    }
}

fn run_resolve(
    language: Option<String>,
    property: Option<String>,
    bag: Option<String>,
    human: bool,
) {
    let selectors = match bag {
        Some(raw) => {
            let value: serde_json::Value = match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Error parsing selector bag: {}", e);
                    process::exit(2);
                }
            };
            match Selectors::from_bag(&value) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Invalid selector bag: {}", e);
                    process::exit(2);
                }
            }
        }
        None => Selectors::new(language, property),
    };

    let resolver = Resolver::new(selectors);
    let resolved = resolver.resolve_all();

    if human {
        println!("provider: {}", resolved.provider);
        println!("color: {}", resolved.color);
        println!("parameter: {}", resolved.parameter);
    } else {
        match serde_json::to_string_pretty(&resolved) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}
