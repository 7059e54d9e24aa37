use anyhow::{Context, Result};
use catalog::{demo_products, load_products, Color, Product, Size};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use journal::{load_journal, save_journal, EntryCounter, FileStore, Journal, JournalError};
use specification::specs::{AllOf, ColorSpecification, NotSpecification, OrSpecification, SizeSpecification};
use specification::{FilterEngine, NaiveFilter, Specification};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Filter a product catalog with composable specifications, and keep a journal
#[derive(Parser)]
#[command(name = "ocp-srp")]
#[command(about = "Specification-pattern filtering and journal persistence", long_about = None)]
struct Cli {
    /// Separator written between journal lines on disk (must not be empty)
    #[arg(
        long,
        global = true,
        default_value = "\n",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    line_separator: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter products by color, size and name prefix
    Filter(FilterArgs),

    /// Add to, show or prune a journal stored on disk
    Journal {
        /// Journal file
        #[arg(long, default_value = "journal.txt")]
        store: PathBuf,

        #[command(subcommand)]
        action: JournalAction,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Catalog file (`name::color::size` per line); built-in demo catalog if omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long)]
    color: Option<Color>,

    #[arg(long)]
    size: Option<Size>,

    /// Keep products whose name starts with this prefix
    #[arg(long)]
    name_prefix: Option<String>,

    /// Match any criterion instead of all of them
    #[arg(long)]
    any: bool,

    /// Invert the combined criteria
    #[arg(long)]
    negate: bool,

    /// Scan in parallel when the catalog has at least this many products
    #[arg(long)]
    parallel_threshold: Option<usize>,

    /// Also print what the per-attribute filter methods return
    #[arg(long)]
    naive: bool,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum JournalAction {
    /// Append one entry
    Add {
        /// Entry text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print every entry
    Show,

    /// Remove the entry at a zero-based position
    Remove {
        #[arg(long)]
        index: usize,
    },
}

/// Matches products whose name starts with a prefix.
struct NamePrefixSpecification {
    prefix: String,
}

impl Specification<Product> for NamePrefixSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.name.starts_with(&self.prefix)
    }

    fn name(&self) -> String {
        format!("name^={}", self.prefix)
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter(args) => handle_filter(args)?,
        Commands::Journal { store, action } => {
            let file_store =
                FileStore::new(cli.line_separator).context("Invalid --line-separator")?;
            handle_journal(file_store, store, action)?
        }
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(args: FilterArgs) -> Result<()> {
    let products = match &args.catalog {
        Some(path) => load_products(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => demo_products(),
    };
    info!("Loaded {} products", products.len());

    let mut engine: FilterEngine<Product> = FilterEngine::new();
    if let Some(spec) = build_specification(&args) {
        engine = engine.with_specification(spec);
    }
    if let Some(threshold) = args.parallel_threshold {
        engine = engine.with_parallel_threshold(threshold);
    }

    // No criteria means no specification, which the engine rejects.
    let matches = engine
        .apply(&products)
        .context("Pass at least one of --color, --size or --name-prefix")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        let title = engine
            .specification()
            .map(|spec| spec.name())
            .unwrap_or_default();
        print_products(&format!("Products matching {title}:"), &matches);
    }

    if args.naive {
        let naive = NaiveFilter;
        if let Some(color) = args.color {
            print_products(
                &format!("filter_by_color({color}):"),
                &naive.filter_by_color(&products, color),
            );
        }
        if let Some(size) = args.size {
            print_products(
                &format!("filter_by_size({size}):"),
                &naive.filter_by_size(&products, size),
            );
        }
    }

    Ok(())
}

/// Combine the requested criteria into one specification.
///
/// Returns `None` when no criterion was given.
fn build_specification(args: &FilterArgs) -> Option<Box<dyn Specification<Product>>> {
    let mut criteria: Vec<Box<dyn Specification<Product>>> = Vec::new();
    if let Some(color) = args.color {
        criteria.push(Box::new(ColorSpecification::new(color)));
    }
    if let Some(size) = args.size {
        criteria.push(Box::new(SizeSpecification::new(size)));
    }
    if let Some(prefix) = &args.name_prefix {
        criteria.push(Box::new(NamePrefixSpecification {
            prefix: prefix.clone(),
        }));
    }

    let combined: Box<dyn Specification<Product>> = if args.any {
        let mut iter = criteria.into_iter();
        let first = iter.next()?;
        iter.fold(first, |acc, next| -> Box<dyn Specification<Product>> {
            Box::new(OrSpecification::<Product>::new(acc, next))
        })
    } else {
        if criteria.is_empty() {
            return None;
        }
        Box::new(
            criteria
                .into_iter()
                .fold(AllOf::<Product>::new(), |all, spec| all.with(spec)),
        )
    };

    if args.negate {
        Some(Box::new(NotSpecification::<Product>::new(combined)))
    } else {
        Some(combined)
    }
}

/// Handle the 'journal' command
fn handle_journal(store: FileStore, path: PathBuf, action: JournalAction) -> Result<()> {
    let destination = path.to_string_lossy().into_owned();

    let mut journal = match load_journal(&store, &destination, Arc::new(EntryCounter::new())) {
        Ok(journal) => journal,
        Err(JournalError::NotFound { .. }) => Journal::new(Arc::new(EntryCounter::new())),
        Err(e) => return Err(e).with_context(|| format!("Failed to load {destination}")),
    };
    // Continue numbering after the last stored entry.
    journal
        .counter()
        .advance_to(last_entry_number(journal.entries()));

    match action {
        JournalAction::Add { text } => {
            let number = journal.add_entry(&text.join(" "))?;
            save_journal(&store, &journal, &destination)
                .with_context(|| format!("Failed to save {destination}"))?;
            println!("{} Added entry {}", "✓".green(), number);
        }
        JournalAction::Show => {
            println!("{}", format!("Journal {destination}:").bold().blue());
            if journal.is_empty() {
                println!("  (empty)");
            } else {
                println!("{journal}");
            }
        }
        JournalAction::Remove { index } => {
            let removed = journal.remove_entry(index)?;
            save_journal(&store, &journal, &destination)
                .with_context(|| format!("Failed to save {destination}"))?;
            println!("{} Removed \"{}\"", "✓".green(), removed);
        }
    }

    Ok(())
}

/// Number at the start of the last `"{n}. text"` entry, or the entry count.
fn last_entry_number(entries: &[String]) -> u64 {
    entries
        .last()
        .and_then(|line| line.split_once(". "))
        .and_then(|(number, _)| number.parse().ok())
        .unwrap_or(entries.len() as u64)
}

/// Helper function to print a titled list of products
fn print_products(title: &str, products: &[&Product]) {
    println!("{}", title.bold().blue());
    if products.is_empty() {
        println!("  (none)");
    }
    for (rank, product) in products.iter().enumerate() {
        println!(
            "{}. {} [{}, {}]",
            (rank + 1).to_string().green(),
            product.name,
            product.color,
            product.size
        );
    }
}
