use anyhow::Result;
use bookshelf::{by_author, Book, Cursor, FilterCursor, LimitCursor, Shelf};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", about = "Narrated cursor-traversal demos over a small book shelf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Traverse the whole shelf with a base cursor.
    List,
    /// Traverse through a filtering decorator.
    Filter {
        /// Author whose books to surface.
        #[arg(long, default_value = "Ray Bradbury")]
        author: String,
    },
    /// Remove one book through the cursor, then re-traverse.
    Prune {
        /// Title of the book to remove.
        #[arg(long, default_value = "Brave New World")]
        title: String,
    },
    /// Stack a limit decorator over a filter decorator.
    Showcase {
        /// Author whose books to surface.
        #[arg(long, default_value = "George Orwell")]
        author: String,
        /// Maximum number of books to surface.
        #[arg(long, default_value_t = 1)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => run_list()?,
        Commands::Filter { author } => run_filter(&author)?,
        Commands::Prune { title } => run_prune(&title)?,
        Commands::Showcase { author, limit } => run_showcase(&author, limit)?,
    }

    Ok(())
}

/// The canonical five-book shelf used by every demo.
fn sample_shelf() -> Shelf {
    let mut shelf = Shelf::with_capacity(5);
    for book in [
        Book::new("1984", "George Orwell"),
        Book::new("Animal Farm", "George Orwell"),
        Book::new("Fahrenheit 451", "Ray Bradbury"),
        Book::new("The Martian Chronicles", "Ray Bradbury"),
        Book::new("Brave New World", "Aldous Huxley"),
    ] {
        if !shelf.add(book) {
            println!("Shelf is full, book not added.");
        }
    }
    shelf
}

fn run_list() -> Result<()> {
    let mut shelf = sample_shelf();
    println!("All books on the shelf:");
    for book in shelf.cursor().into_iter() {
        println!(" - {book}");
    }
    Ok(())
}

fn run_filter(author: &str) -> Result<()> {
    let mut shelf = sample_shelf();
    println!("Books by {author}:");
    let filtered = FilterCursor::new(shelf.cursor(), by_author(author));
    let mut found = false;
    for book in filtered.into_iter() {
        println!(" - {book}");
        found = true;
    }
    if !found {
        println!(" (none on the shelf)");
    }
    Ok(())
}

fn run_prune(title: &str) -> Result<()> {
    let mut shelf = sample_shelf();

    let mut cursor = shelf.cursor();
    let mut removed = None;
    while cursor.has_next() {
        let book = cursor.next()?;
        if book.title() == title {
            removed = Some(cursor.remove()?);
            break;
        }
    }

    match removed {
        Some(book) => println!("Removed: {book}"),
        None => println!("No book titled '{title}' on the shelf."),
    }

    println!("\nRemaining books:");
    for book in shelf.cursor().into_iter() {
        println!(" - {book}");
    }
    Ok(())
}

fn run_showcase(author: &str, limit: usize) -> Result<()> {
    let mut shelf = sample_shelf();
    println!("First {limit} book(s) by {author}:");
    let stack = LimitCursor::new(FilterCursor::new(shelf.cursor(), by_author(author)), limit);
    for book in stack.into_iter() {
        println!(" - {book}");
    }
    Ok(())
}
