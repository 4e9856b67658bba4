use std::error::Error as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use datetree::date::Date;
use datetree::loader::{self, LoadError, LoadReport};
use datetree::ordered::{Order, OrderedTree};

/// Everything that can stop the binary.
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

/// Load dates into a binary search tree and print its traversals
#[derive(Parser, Debug)]
#[command(name = "datetree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data files with one "DAY MONTH YEAR" record per line
    #[arg(required_unless_present = "manifest")]
    files: Vec<PathBuf>,

    /// File listing data files, one per line
    #[arg(short, long, conflicts_with = "files")]
    manifest: Option<PathBuf>,

    /// Traversal to print; repeat for several (default: all three)
    #[arg(short, long, value_enum)]
    order: Vec<OrderArg>,

    /// Date to look for, as "DAY MONTH YEAR"; may be repeated
    #[arg(short, long)]
    search: Vec<Date>,

    /// Debug level, repeat for more (-d -d -d)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    In,
    Pre,
    Post,
}

impl From<OrderArg> for Order {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::In => Order::InOrder,
            OrderArg::Pre => Order::PreOrder,
            OrderArg::Post => Order::PostOrder,
        }
    }
}

fn label(order: Order) -> &'static str {
    match order {
        Order::InOrder => "In-Order Traversal",
        Order::PreOrder => "Pre-Order Traversal",
        Order::PostOrder => "Post-Order Traversal",
    }
}

fn render(tree: &OrderedTree<Date>, order: Order) -> String {
    let mut dates = Vec::with_capacity(tree.len());
    tree.traverse(order, |date| dates.push(date.to_string()));
    dates.join(" ")
}

fn search_message(tree: &OrderedTree<Date>, date: &Date) -> String {
    if tree.search(date) {
        format!("Date {} found in the tree.", date)
    } else {
        format!("Date {} not found in the tree.", date)
    }
}

fn load(cli: &Cli, tree: &mut OrderedTree<Date>) -> Result<LoadReport, LoadError> {
    match &cli.manifest {
        Some(manifest) => loader::load_manifest(manifest, tree),
        None => {
            let mut report = LoadReport::default();
            for file in &cli.files {
                report += loader::load_file(file, tree)?;
            }
            Ok(report)
        }
    }
}

/// Writes the requested traversals and search results for `tree`, then empties it.
fn report(cli: &Cli, tree: &mut OrderedTree<Date>, out: &mut impl Write) -> io::Result<()> {
    let orders: Vec<Order> = if cli.order.is_empty() {
        vec![Order::InOrder, Order::PreOrder, Order::PostOrder]
    } else {
        cli.order.iter().copied().map(Order::from).collect()
    };
    for order in orders {
        writeln!(out, "{}: {}", label(order), render(tree, order))?;
    }

    for date in &cli.search {
        writeln!(out, "{}", search_message(tree, date))?;
    }

    tree.clear();
    debug!("tree cleared");
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut tree = OrderedTree::new();
    let loaded = load(cli, &mut tree)?;
    info!(report = ?loaded, size = tree.len(), height = tree.height(), "tree loaded");

    report(cli, &mut tree, out)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // RUST_LOG still wins for anyone who wants per-module control.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
