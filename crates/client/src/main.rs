//! Interactive terminal front end for the Rolodex contact manager.
//!
//! Reads commands line-by-line from stdin, forwards them through
//! [`ContactBook`], and renders the resulting page after each operation.

use std::io::{self, BufRead};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rolodex_client::api::ContactsApi;
use rolodex_client::book::ContactBook;
use rolodex_core::pagination::DEFAULT_PAGE_SIZE;
use rolodex_core::types::DbId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing (to stderr, keeping stdout for the UI) ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rolodex_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // --- Configuration ---
    let base_url =
        std::env::var("ROLODEX_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".into());

    let mut book = ContactBook::new(ContactsApi::new(base_url.clone()), DEFAULT_PAGE_SIZE);

    // --- First load ---
    book.load_page(1)
        .await
        .with_context(|| format!("could not reach the API server at {base_url}"))?;
    render(&book);

    // --- Command loop ---
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if !run_command(&mut book, line.trim()).await {
            break;
        }
    }

    Ok(())
}

/// Execute a single command line. Returns `false` when the session should
/// end.
async fn run_command(book: &mut ContactBook, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}

        "list" => {
            // Re-fetch in place; on failure the prior page stays rendered.
            if let Err(err) = book.load_page(book.view.page).await {
                tracing::warn!(error = %err, "List failed, showing previous page");
            }
            render(book);
        }

        "next" => match book.next_page().await {
            Ok(true) => render(book),
            Ok(false) => println!("Already on the last page."),
            Err(err) => tracing::warn!(error = %err, "Next page failed, showing previous page"),
        },

        "prev" => match book.prev_page().await {
            Ok(true) => render(book),
            Ok(false) => println!("Already on the first page."),
            Err(err) => tracing::warn!(error = %err, "Previous page failed, showing previous page"),
        },

        "goto" => match rest.parse::<i64>() {
            Ok(page) => {
                if let Err(err) = book.load_page(page).await {
                    tracing::warn!(error = %err, "Page load failed, showing previous page");
                }
                render(book);
            }
            Err(_) => println!("Usage: goto <page>"),
        },

        "add" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            if fields.len() != 3 {
                println!("Usage: add <name> | <email> | <phone>");
                return true;
            }
            match book.add(fields[0], fields[1], fields[2]).await {
                Ok(contact) => {
                    println!("Added contact {}.", contact.id);
                    render(book);
                }
                Err(err) => eprintln!("Failed to add contact: {err}"),
            }
        }

        "delete" => match rest.parse::<DbId>() {
            Ok(id) => match book.remove(id).await {
                Ok(()) => {
                    println!("Deleted contact {id}.");
                    render(book);
                }
                Err(err) => eprintln!("Failed to delete contact: {err}"),
            },
            Err(_) => println!("Usage: delete <id>"),
        },

        "help" => print_help(),

        "quit" | "exit" => return false,

        other => println!("Unknown command '{other}'; type 'help' for commands."),
    }

    true
}

/// Render the current page and pager line.
fn render(book: &ContactBook) {
    let view = &book.view;

    if view.contacts.is_empty() {
        println!("No contacts found");
    } else {
        for contact in &view.contacts {
            println!(
                "{:>4}. {} | {} | {}",
                contact.id, contact.name, contact.email, contact.phone
            );
        }
    }

    println!(
        "Page {} of {} ({} contacts)",
        view.page,
        view.total_pages(),
        view.total
    );
}

fn print_help() {
    println!("Commands:");
    println!("  list                          re-fetch and show the current page");
    println!("  next / prev                   move through pages");
    println!("  goto <page>                   jump to a page");
    println!("  add <name> | <email> | <phone>  create a contact");
    println!("  delete <id>                   delete a contact");
    println!("  help                          show this help");
    println!("  quit                          leave");
}
