//! Console entry point for the set catalog.
//!
//! With no query flag it runs the demonstration queries against the resolved
//! catalog and prints the answers to stdout. Each query is also reachable on
//! its own through a flag so shells can script a single question. The catalog
//! is loaded exactly once per invocation; a load failure aborts before any
//! query runs.

use anyhow::{Context, Result, bail};
use brickset::{SetCatalog, resolve_catalog_path};
use std::env;
use std::path::PathBuf;

// Fixed arguments for the demonstration run.
const DEMO_TAG: &str = "Car";
const DEMO_NUMBER: &str = "3836";
const DEMO_THEME: &str = "Games";
const DEMO_PIECE_LIMIT: i64 = 150;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .context("configuring logger")?
        .start()
        .context("starting logger")?;

    let args = CliArgs::parse()?;
    let catalog_path = match args.catalog {
        Some(path) => path,
        None => resolve_catalog_path()?,
    };
    let catalog = SetCatalog::load(&catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;

    match args.query {
        Query::Demo => run_demo(&catalog),
        Query::TagCount(tag) => {
            print_tag_count(&catalog, &tag);
            Ok(())
        }
        Query::NamesByNumber(number) => {
            print_names_by_number(&catalog, &number);
            Ok(())
        }
        Query::MaxPieces => print_max_pieces(&catalog),
        Query::NamesByTheme(theme) => print_names_by_theme(&catalog, &theme),
        Query::PiecesUnder(limit) => {
            print_names_with_pieces_under(&catalog, limit);
            Ok(())
        }
    }
}

fn run_demo(catalog: &SetCatalog) -> Result<()> {
    print_tag_count(catalog, DEMO_TAG);
    print_names_by_number(catalog, DEMO_NUMBER);
    print_max_pieces(catalog)?;
    print_names_by_theme(catalog, DEMO_THEME)?;
    print_names_with_pieces_under(catalog, DEMO_PIECE_LIMIT);
    Ok(())
}

fn print_tag_count(catalog: &SetCatalog, tag: &str) {
    println!("Number of sets tagged {tag:?}: {}", catalog.count_with_tag(tag));
}

fn print_names_by_number(catalog: &SetCatalog, number: &str) {
    // Matches stream straight to stdout as the iterator yields them.
    for name in catalog.names_by_number(number) {
        println!("{name}");
    }
}

fn print_max_pieces(catalog: &SetCatalog) -> Result<()> {
    println!("Most pieces in a single set: {}", catalog.max_pieces()?);
    Ok(())
}

fn print_names_by_theme(catalog: &SetCatalog, theme: &str) -> Result<()> {
    let names = catalog.names_by_theme(theme)?;
    println!("Sets in theme {theme:?}:");
    for name in names {
        println!("  {name}");
    }
    Ok(())
}

fn print_names_with_pieces_under(catalog: &SetCatalog, limit: i64) {
    println!("Sets with fewer than {limit} pieces:");
    for name in catalog.names_with_pieces_under(limit) {
        println!("  {name}");
    }
}

enum Query {
    Demo,
    TagCount(String),
    NamesByNumber(String),
    MaxPieces,
    NamesByTheme(String),
    PiecesUnder(i64),
}

struct CliArgs {
    catalog: Option<PathBuf>,
    query: Query,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self> {
        fn set_query(candidate: Query, slot: &mut Option<Query>) -> Result<()> {
            if slot.is_some() {
                bail!("at most one query flag may be given per invocation");
            }
            *slot = Some(candidate);
            Ok(())
        }

        let mut args = args.into_iter();
        let mut catalog: Option<PathBuf> = None;
        let mut query: Option<Query> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    if catalog.is_some() {
                        bail!("--catalog provided multiple times");
                    }
                    catalog = Some(PathBuf::from(next_value(&mut args, "--catalog")?));
                }
                "--tag" => {
                    let tag = next_value(&mut args, "--tag")?;
                    set_query(Query::TagCount(tag), &mut query)?;
                }
                "--number" => {
                    let number = next_value(&mut args, "--number")?;
                    set_query(Query::NamesByNumber(number), &mut query)?;
                }
                "--max-pieces" => {
                    set_query(Query::MaxPieces, &mut query)?;
                }
                "--theme" => {
                    let theme = next_value(&mut args, "--theme")?;
                    set_query(Query::NamesByTheme(theme), &mut query)?;
                }
                "--under" => {
                    let raw = next_value(&mut args, "--under")?;
                    let limit: i64 = raw
                        .parse()
                        .with_context(|| format!("--under expects an integer, got {raw}"))?;
                    set_query(Query::PiecesUnder(limit), &mut query)?;
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        Ok(CliArgs {
            catalog,
            query: query.unwrap_or(Query::Demo),
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: brickset [--catalog PATH] [--tag TAG | --number NUMBER | --max-pieces | --theme THEME | --under PIECES]\n\
With no query flag, runs the demonstration queries: tag \"Car\", number 3836, most pieces, theme \"Games\", fewer than 150 pieces.\n\
The catalog defaults to data/brickset.json and can be overridden with --catalog or BRICKSET_CATALOG.\n"
}
