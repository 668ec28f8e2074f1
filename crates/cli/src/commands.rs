//! Interactive menu handlers
//!
//! The dispatcher owns every prompt and confirmation; the catalog crate
//! owns every state transition. Display logic gates rating and comment on
//! the read flag, so stale values on an unread record are never shown.

use anyhow::{Context, Result};
use bookshelf_catalog::{Catalog, CatalogError, CatalogFile, SortKey};
use bookshelf_core::{Book, BookId};
use console::style;
use std::io::{self, Write};

/// Runs the interactive menu loop until the user quits
pub fn run_menu(mut catalog: Catalog, store: &CatalogFile) -> Result<()> {
    println!(
        "{}",
        style("=== Bookshelf - Personal Library ===").bold().cyan()
    );

    loop {
        print_menu();
        let choice = read_line("Enter your choice: ")?;
        match choice.as_str() {
            "1" => display_all(&catalog),
            "2" => add_book(&mut catalog)?,
            "3" => delete_book(&mut catalog)?,
            "4" => search_books(&catalog)?,
            "5" => mark_book_read(&mut catalog)?,
            "6" => show_by_status(&catalog)?,
            "7" => sort_books(&catalog)?,
            "8" => {
                quit(&catalog, store);
                break;
            }
            _ => println!("Invalid choice, please try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\nMenu:");
    println!("1. Display all books");
    println!("2. Add a book");
    println!("3. Delete a book");
    println!("4. Search for a book");
    println!("5. Mark a book as read");
    println!("6. Show read/unread books");
    println!("7. Sort the books");
    println!("8. Quit");
}

/// Display the whole catalog
fn display_all(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No books in the catalog.");
        return;
    }

    println!("\n{}", style("All books:").bold());
    for book in catalog.books() {
        println!("{}", format_book_line(book));
    }
}

/// Add a new book (prompts for title, author, year)
fn add_book(catalog: &mut Catalog) -> Result<()> {
    println!("\n{}", style("Add a new book").bold());

    let title = read_line("Title: ")?;
    if title.is_empty() {
        println!("The title cannot be empty. Add cancelled.");
        return Ok(());
    }

    let author = read_line("Author: ")?;
    if author.is_empty() {
        println!("The author cannot be empty. Add cancelled.");
        return Ok(());
    }

    let year_input = read_line("Publication year: ")?;
    let year: i32 = match year_input.parse() {
        Ok(year) => year,
        Err(_) => {
            println!("Invalid year. Add cancelled.");
            return Ok(());
        }
    };

    match catalog.add(&title, &author, year) {
        Ok(id) => println!(
            "{} Book added successfully (ID {}).",
            style("✓").green().bold(),
            id
        ),
        Err(CatalogError::Validation(e)) => {
            println!("{} Add cancelled.", e.user_message());
        }
        Err(e) => return Err(e).context("Failed to add book"),
    }

    Ok(())
}

/// Delete a book after a confirmation prompt
fn delete_book(catalog: &mut Catalog) -> Result<()> {
    println!("\n{}", style("Delete a book").bold());

    let input = read_line("Enter the ID of the book to delete: ")?;
    if input.is_empty() {
        println!("Operation cancelled (no ID given).");
        return Ok(());
    }
    let id = match BookId::from_string(&input) {
        Ok(id) => id,
        Err(_) => {
            println!("Invalid ID. Please enter a number.");
            return Ok(());
        }
    };

    let title = match catalog.get(id) {
        Some(book) => book.title.clone(),
        None => {
            println!("No book with ID {} was found.", id);
            return Ok(());
        }
    };

    let confirm = read_line(&format!(
        "Are you sure you want to delete \"{}\"? (y/N): ",
        title
    ))?;
    if confirm.eq_ignore_ascii_case("y") {
        let removed = catalog
            .delete(id)
            .context("Failed to delete book")?;
        println!(
            "{} Book deleted: {}",
            style("✓").green().bold(),
            removed.title
        );
    } else {
        println!("Deletion cancelled.");
    }

    Ok(())
}

/// Keyword search over titles and authors
fn search_books(catalog: &Catalog) -> Result<()> {
    println!("\n{}", style("Search for a book").bold());

    let keyword = read_line("Enter a search keyword: ")?;
    if keyword.is_empty() {
        println!("Operation cancelled (empty keyword).");
        return Ok(());
    }

    let results = catalog.find(&keyword);
    if results.is_empty() {
        println!("No books found for \"{}\".", keyword);
    } else {
        println!("{} book(s) found for \"{}\":", results.len(), keyword);
        for book in results {
            println!("{}", format_book_line(book));
        }
    }

    Ok(())
}

/// Mark a book as read, with optional rating and comment
fn mark_book_read(catalog: &mut Catalog) -> Result<()> {
    println!("\n{}", style("Mark a book as read").bold());

    let input = read_line("Enter the ID of the book to mark as read: ")?;
    if input.is_empty() {
        println!("Operation cancelled (no ID given).");
        return Ok(());
    }
    let id = match BookId::from_string(&input) {
        Ok(id) => id,
        Err(_) => {
            println!("Invalid ID. Please enter a number.");
            return Ok(());
        }
    };

    let (title, already_read) = match catalog.get(id) {
        Some(book) => (book.title.clone(), book.read),
        None => {
            println!("No book with ID {} was found.", id);
            return Ok(());
        }
    };

    if already_read {
        let confirm =
            read_line("This book is already marked as read. Update the rating/comment? (y/N): ")?;
        if !confirm.eq_ignore_ascii_case("y") {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let rating_input = read_line("Enter a rating out of 10 (leave empty for none): ")?;
    let rating = match rating_input.as_str() {
        "" => None,
        s => match s.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                println!("Invalid rating input. The rating will not be stored.");
                None
            }
        },
    };

    let comment = read_line("Enter a comment (leave empty for none): ")?;

    let outcome = catalog
        .mark_read(id, rating, Some(comment))
        .context("Failed to mark book as read")?;
    if let Some(value) = outcome.rejected_rating {
        println!(
            "Rating {} is out of range (must be between 0 and 10). The rating will not be stored.",
            value
        );
    }

    println!(
        "{} \"{}\" is now marked as read.",
        style("✓").green().bold(),
        title
    );

    Ok(())
}

/// Show read or unread books
fn show_by_status(catalog: &Catalog) -> Result<()> {
    println!("\n{}", style("Show books by status").bold());

    let choice = read_line("Type '1' for read books, '2' for unread books: ")?;
    let read = match choice.as_str() {
        "1" => true,
        "2" => false,
        _ => {
            println!("Invalid choice. Operation cancelled.");
            return Ok(());
        }
    };

    let books = catalog.filter_by_status(read);
    if books.is_empty() {
        if read {
            println!("No read books yet.");
        } else {
            println!("No unread books.");
        }
        return Ok(());
    }

    println!("{}", if read { "Read books:" } else { "Unread books:" });
    for book in books {
        println!("{}", format_book_line(book));
    }

    Ok(())
}

/// Render a sorted view of the catalog
fn sort_books(catalog: &Catalog) -> Result<()> {
    println!("\n{}", style("Sort the books").bold());
    println!("Choose a sort criterion:");
    println!("1. Year (ascending)");
    println!("2. Author (alphabetical)");
    println!("3. Rating (descending)");

    let choice = read_line("Your choice (1/2/3): ")?;
    let (key, label) = match choice.as_str() {
        "1" => (SortKey::Year, "year (oldest first)"),
        "2" => (SortKey::Author, "author"),
        "3" => (SortKey::Rating, "rating (best first)"),
        _ => {
            println!("Invalid choice. Operation cancelled.");
            return Ok(());
        }
    };

    println!("Books sorted by {}:", label);
    for book in catalog.sorted_by(key) {
        println!("{}", format_book_line(book));
    }

    Ok(())
}

/// Best-effort save and goodbye
fn quit(catalog: &Catalog, store: &CatalogFile) {
    match store.save(catalog.books()) {
        Ok(()) => println!("Catalog saved. Goodbye!"),
        Err(e) => {
            log::error!("Failed to save catalog: {}", e);
            println!(
                "{} Failed to save the catalog: {}. Your changes were not written.",
                style("✗").red().bold(),
                e
            );
        }
    }
}

/// Prompts on stdout and returns the trimmed input line
fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// One summary line per record; rating and comment only when read
fn format_book_line(book: &Book) -> String {
    let read = if book.read { "Yes" } else { "No" };
    let mut line = format!(
        "ID {}: \"{}\" by {} ({}) - Read: {}",
        book.id, book.title, book.author, book.year, read
    );

    if book.read {
        if let Some(rating) = book.rating {
            line.push_str(&format!(", Rating: {}", rating));
        }
        if let Some(comment) = &book.comment {
            line.push_str(&format!("\n    Comment: {}", comment));
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::Rating;

    #[test]
    fn test_format_unread_book() {
        let book = Book::new(BookId::new(1), "The Hobbit", "J.R.R. Tolkien", 1937);
        assert_eq!(
            format_book_line(&book),
            "ID 1: \"The Hobbit\" by J.R.R. Tolkien (1937) - Read: No"
        );
    }

    #[test]
    fn test_format_read_book_with_rating_and_comment() {
        let mut book = Book::new(BookId::new(2), "Dune", "Frank Herbert", 1965);
        book.mark_read(Some(Rating::new(9).unwrap()), Some("Epic".to_string()));

        let line = format_book_line(&book);
        assert!(line.starts_with("ID 2: \"Dune\" by Frank Herbert (1965) - Read: Yes"));
        assert!(line.contains("Rating: 9/10"));
        assert!(line.contains("    Comment: Epic"));
    }

    #[test]
    fn test_format_read_book_without_rating() {
        let mut book = Book::new(BookId::new(3), "Emma", "Jane Austen", 1815);
        book.mark_read(None, None);

        let line = format_book_line(&book);
        assert!(line.ends_with("Read: Yes"));
        assert!(!line.contains("Rating"));
        assert!(!line.contains("Comment"));
    }

    #[test]
    fn test_format_gates_stale_fields_on_read_flag() {
        // A rating or comment left over from a prior state must not be
        // displayed while the book is unread
        let mut book = Book::new(BookId::new(4), "Dune", "Frank Herbert", 1965);
        book.rating = Some(Rating::new(7).unwrap());
        book.comment = Some("stale".to_string());
        book.read = false;

        let line = format_book_line(&book);
        assert!(!line.contains("Rating"));
        assert!(!line.contains("stale"));
    }
}
