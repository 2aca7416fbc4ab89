//! `tat tx` command - transaction management
//!
//! Transactions depend on tenpista data in one direction: the owner filter
//! and the form's selector read the (cached) tenpista collection, and the
//! interactive form can create a tenpista inline through the store's
//! creator capability.

use chrono::Utc;
use clap::Subcommand;
use console::{style, Term};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{confirm_delete, format_clp, format_local_date};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::UpdateTransactionDto;
use crate::forms::transaction::{interactive, submit, to_local_editable, TransactionDraft};
use crate::views::{self, ListState};

#[derive(Subcommand, Debug)]
pub enum TxCommands {
    /// List transactions, grouped by owner with the newest first
    List(ListArgs),

    /// Show a transaction's details
    Show(ShowArgs),

    /// Create a new transaction
    New(NewArgs),

    /// Edit an existing transaction
    Edit(EditArgs),

    /// Delete a transaction
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only show transactions of this tenpista (client-side filter)
    #[arg(long, short = 't')]
    pub tenpista: Option<i64>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Transaction id
    pub id: i64,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Owning tenpista id
    #[arg(long, short = 't')]
    pub tenpista: Option<i64>,

    /// Amount in CLP
    #[arg(long, short = 'a')]
    pub amount: Option<String>,

    /// Local date and time, YYYY-MM-DDTHH:MM; defaults to now
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// Merchant or business name
    #[arg(long, short = 'm')]
    pub merchant: Option<String>,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Transaction id
    pub id: i64,

    /// New owning tenpista id; keeps the current one when omitted
    #[arg(long, short = 't')]
    pub tenpista: Option<i64>,

    /// New amount in CLP; keeps the current one when omitted
    #[arg(long, short = 'a')]
    pub amount: Option<String>,

    /// New local date and time; keeps the current one when omitted
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// New merchant; keeps the current one when omitted
    #[arg(long, short = 'm')]
    pub merchant: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Transaction id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Run a transaction subcommand
pub fn run(cmd: TxCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TxCommands::List(args) => run_list(args, global),
        TxCommands::Show(args) => run_show(args, global),
        TxCommands::New(args) => run_new(args, global),
        TxCommands::Edit(args) => run_edit(args, global),
        TxCommands::Delete(args) => run_delete(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::transaction_store(global);
    let term = Term::stdout();

    let show_skeleton =
        global.format == OutputFormat::Table && term.is_term() && !store.is_warm();
    if show_skeleton {
        term.write_line(&views::transaction::render(&ListState::Loading, false))
            .into_diagnostic()?;
    }

    let fetched = if global.refresh {
        store.refresh()
    } else {
        store.list()
    };

    if show_skeleton {
        term.clear_last_lines(views::transaction::SKELETON_ROWS)
            .into_diagnostic()?;
    }

    let items = fetched.map_err(super::api_failure)?;
    let items = views::transaction::filter_by_tenpista(items, args.tenpista);

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).into_diagnostic()?);
        }
        OutputFormat::Table => {
            let count = items.len();
            println!(
                "{}",
                views::transaction::render(
                    &ListState::from_items(items),
                    args.tenpista.is_some()
                )
            );
            if count > 0 {
                println!();
                println!("{} transacción(es)", style(count).cyan());
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::transaction_store(global);
    let tx = store.get(args.id).map_err(super::api_failure)?;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tx).into_diagnostic()?);
        }
        OutputFormat::Table => {
            println!("{}", style("─".repeat(40)).dim());
            println!("{}: {}", style("ID").bold(), style(tx.id).cyan());
            println!(
                "{}: {} (id {})",
                style("Tenpista").bold(),
                style(&tx.tenpista_name).yellow(),
                tx.tenpista_id
            );
            println!(
                "{}: {}",
                style("Negocio").bold(),
                tx.merchant_or_business
            );
            println!("{}: {}", style("Fecha").bold(), format_local_date(&tx.date));
            println!("{}: {}", style("Monto").bold(), format_clp(tx.amount));
            println!("{}", style("─".repeat(40)).dim());
        }
    }

    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let tx_store = super::transaction_store(global);
    let tenpista_store = super::tenpista_store(global);

    let no_flags = args.tenpista.is_none()
        && args.amount.is_none()
        && args.date.is_none()
        && args.merchant.is_none();

    let created = if args.interactive || no_flags {
        let options = tenpista_store.list().map_err(super::api_failure)?;
        interactive(None, options, &tenpista_store, &mut |dto| {
            tx_store.create(dto)
        })?
    } else {
        // only a concrete selection needs the option list; every other
        // field error is reportable without touching the network
        let options = match args.tenpista {
            Some(_) => tenpista_store.list().map_err(super::api_failure)?,
            None => Vec::new(),
        };
        let draft = TransactionDraft {
            tenpista_id: args.tenpista,
            amount: args.amount.unwrap_or_default(),
            date: args
                .date
                .unwrap_or_else(|| to_local_editable(&Utc::now())),
            merchant_or_business: args.merchant.unwrap_or_default(),
        };
        submit(&draft, &options, &mut |dto| tx_store.create(dto))
            .map_err(super::form_failure)?
    };

    println!(
        "{} Transacción creada {} (id {})",
        style("✓").green(),
        style(&created.merchant_or_business).cyan(),
        created.id
    );

    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let tx_store = super::transaction_store(global);
    let tenpista_store = super::tenpista_store(global);

    let current = tx_store.get(args.id).map_err(super::api_failure)?;
    let options = tenpista_store.list().map_err(super::api_failure)?;

    let edited_by_flags = args.tenpista.is_some()
        || args.amount.is_some()
        || args.date.is_some()
        || args.merchant.is_some();

    let updated = if edited_by_flags {
        let draft = TransactionDraft {
            tenpista_id: args.tenpista.or(Some(current.tenpista_id)),
            amount: args
                .amount
                .unwrap_or_else(|| format!("{}", current.amount)),
            date: args
                .date
                .unwrap_or_else(|| to_local_editable(&current.date)),
            merchant_or_business: args
                .merchant
                .unwrap_or_else(|| current.merchant_or_business.clone()),
        };
        submit(&draft, &options, &mut |dto| {
            tx_store.update(args.id, &UpdateTransactionDto::from(dto.clone()))
        })
        .map_err(super::form_failure)?
    } else {
        interactive(
            Some(TransactionDraft::from_transaction(&current)),
            options,
            &tenpista_store,
            &mut |dto| tx_store.update(args.id, &UpdateTransactionDto::from(dto.clone())),
        )?
    };

    println!(
        "{} Transacción actualizada {} (id {})",
        style("✓").green(),
        style(&updated.merchant_or_business).cyan(),
        updated.id
    );

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    if !args.yes && !confirm_delete()? {
        println!("Operación cancelada.");
        return Ok(());
    }

    let store = super::transaction_store(global);
    store.delete(args.id).map_err(super::api_failure)?;

    println!("{} Registro eliminado.", style("✓").green());
    Ok(())
}
