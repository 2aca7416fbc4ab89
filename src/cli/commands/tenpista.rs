//! `tat tenpista` command - tenpista management

use clap::Subcommand;
use console::{style, Term};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::confirm_delete;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::UpdateTenpistaDto;
use crate::forms::tenpista::{interactive, submit, TenpistaDraft};
use crate::views::{self, ListState};

#[derive(Subcommand, Debug)]
pub enum TenpistaCommands {
    /// List tenpistas, sorted by name
    List,

    /// Show a tenpista's details
    Show(ShowArgs),

    /// Create a new tenpista
    New(NewArgs),

    /// Edit an existing tenpista
    Edit(EditArgs),

    /// Delete a tenpista
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Tenpista id
    pub id: i64,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Tenpista name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Chilean RUT (e.g. 12345678-9)
    #[arg(long, short = 'r')]
    pub rut: Option<String>,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Tenpista id
    pub id: i64,

    /// New name; keeps the current one when omitted
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New RUT; keeps the current one when omitted
    #[arg(long, short = 'r')]
    pub rut: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Tenpista id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Run a tenpista subcommand
pub fn run(cmd: TenpistaCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TenpistaCommands::List => run_list(global),
        TenpistaCommands::Show(args) => run_show(args, global),
        TenpistaCommands::New(args) => run_new(args, global),
        TenpistaCommands::Edit(args) => run_edit(args, global),
        TenpistaCommands::Delete(args) => run_delete(args, global),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = super::tenpista_store(global);
    let term = Term::stdout();

    // cold cache on an interactive terminal: skeleton rows while fetching
    let show_skeleton =
        global.format == OutputFormat::Table && term.is_term() && !store.is_warm();
    if show_skeleton {
        term.write_line(&views::tenpista::render(&ListState::Loading))
            .into_diagnostic()?;
    }

    let fetched = if global.refresh {
        store.refresh()
    } else {
        store.list()
    };

    if show_skeleton {
        term.clear_last_lines(views::tenpista::SKELETON_ROWS)
            .into_diagnostic()?;
    }

    let items = fetched.map_err(super::api_failure)?;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).into_diagnostic()?);
        }
        OutputFormat::Table => {
            let count = items.len();
            println!("{}", views::tenpista::render(&ListState::from_items(items)));
            if count > 0 {
                println!();
                println!("{} tenpista(s)", style(count).cyan());
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::tenpista_store(global);
    let tenpista = store.get(args.id).map_err(super::api_failure)?;

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&tenpista).into_diagnostic()?
            );
        }
        OutputFormat::Table => {
            println!("{}", style("─".repeat(40)).dim());
            println!("{}: {}", style("ID").bold(), style(tenpista.id).cyan());
            println!(
                "{}: {}",
                style("Nombre").bold(),
                style(&tenpista.name).yellow()
            );
            println!("{}: {}", style("RUT").bold(), tenpista.rut);
            println!("{}", style("─".repeat(40)).dim());
        }
    }

    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::tenpista_store(global);

    let created = if args.interactive || (args.name.is_none() && args.rut.is_none()) {
        interactive(None, &mut |dto| store.create(dto))?
    } else {
        let draft = TenpistaDraft {
            name: args.name.unwrap_or_default(),
            rut: args.rut.unwrap_or_default(),
        };
        submit(&draft, &mut |dto| store.create(dto)).map_err(super::form_failure)?
    };

    println!(
        "{} Tenpista creado {} (id {})",
        style("✓").green(),
        style(&created.name).cyan(),
        created.id
    );

    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::tenpista_store(global);
    let current = store.get(args.id).map_err(super::api_failure)?;

    let updated = if args.name.is_some() || args.rut.is_some() {
        let draft = TenpistaDraft {
            name: args.name.unwrap_or(current.name),
            rut: args.rut.unwrap_or(current.rut),
        };
        submit(&draft, &mut |dto| {
            store.update(args.id, &UpdateTenpistaDto::from(dto.clone()))
        })
        .map_err(super::form_failure)?
    } else {
        interactive(Some(TenpistaDraft::from_tenpista(&current)), &mut |dto| {
            store.update(args.id, &UpdateTenpistaDto::from(dto.clone()))
        })?
    };

    println!(
        "{} Tenpista actualizado {} (id {})",
        style("✓").green(),
        style(&updated.name).cyan(),
        updated.id
    );

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    if !args.yes && !confirm_delete()? {
        println!("Operación cancelada.");
        return Ok(());
    }

    let store = super::tenpista_store(global);
    store.delete(args.id).map_err(super::api_failure)?;

    println!("{} Registro eliminado.", style("✓").green());
    Ok(())
}
