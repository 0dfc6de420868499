use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use spendlog::cli::{self, Commands, ListKind};
use spendlog::storage::Store;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Command-line expense tracker",
    long_about = "spendlog is a command-line expense tracker. Record expenses \
                  against your own categories, list and summarize spending by \
                  month or category, and export everything to CSV.",
    arg_required_else_help = true
)]
struct Cli {
    /// Path to the expense store file
    #[arg(
        long,
        env = "SPENDLOG_FILE",
        default_value = "expense.json",
        global = true
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = Store::new(cli.file);
    let mut dataset = store.load()?;

    match cli.command {
        Commands::Add {
            description,
            amount,
            category,
        } => cli::handle_add(&store, &mut dataset, &description, amount, category),

        Commands::Update {
            id,
            description,
            amount,
            category,
        } => cli::handle_update(
            &store,
            &mut dataset,
            id,
            description.as_deref(),
            amount,
            category,
        ),

        Commands::Delete { id } => cli::handle_delete(&store, &mut dataset, id),

        Commands::List { kind } => match kind {
            ListKind::Expense => cli::handle_list_expenses(&dataset),
            ListKind::Category => cli::handle_list_categories(&dataset),
        },

        Commands::Summary { month, category } => cli::handle_summary(&dataset, month, category),

        Commands::CreateCategory { name } => {
            cli::handle_create_category(&store, &mut dataset, &name)
        }

        Commands::EditCategory { id, name } => {
            cli::handle_edit_category(&store, &mut dataset, id, &name)
        }

        Commands::DeleteCategory { id } => cli::handle_delete_category(&store, &mut dataset, id),

        Commands::Export { output } => cli::handle_export(&dataset, &output),
    }

    Ok(())
}
