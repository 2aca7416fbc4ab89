//! Transaction list rendering and the client-side owner filter

use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{skeleton, ListState};
use crate::cli::helpers::{format_clp, format_local_date, truncate_str};
use crate::entities::Transaction;

/// Placeholder rows shown while the first fetch runs
pub const SKELETON_ROWS: usize = 4;

pub const EMPTY_TITLE: &str = "Sin transacciones";
pub const EMPTY_HINT_ALL: &str = "Aún no se han registrado transacciones en el sistema.";
pub const EMPTY_HINT_FILTERED: &str = "Este tenpista aún no tiene transacciones registradas.";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "TENPISTA")]
    tenpista: String,
    #[tabled(rename = "NEGOCIO")]
    merchant: String,
    #[tabled(rename = "FECHA")]
    date: String,
    #[tabled(rename = "MONTO")]
    amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            tenpista: tx.tenpista_name.clone(),
            merchant: truncate_str(&tx.merchant_or_business, 30),
            date: format_local_date(&tx.date),
            amount: format_clp(tx.amount),
        }
    }
}

/// Narrow an already-fetched collection to one owner without touching the
/// network; `None` keeps everything
pub fn filter_by_tenpista(items: Vec<Transaction>, tenpista_id: Option<i64>) -> Vec<Transaction> {
    match tenpista_id {
        Some(id) => items.into_iter().filter(|t| t.tenpista_id == id).collect(),
        None => items,
    }
}

/// Render the list for its current state; `filtered` picks the empty hint
pub fn render(state: &ListState<Transaction>, filtered: bool) -> String {
    match state {
        ListState::Loading => skeleton(SKELETON_ROWS),
        ListState::Empty => {
            let hint = if filtered {
                EMPTY_HINT_FILTERED
            } else {
                EMPTY_HINT_ALL
            };
            format!("{}\n{}", style(EMPTY_TITLE).bold(), style(hint).dim())
        }
        ListState::Ready(items) => {
            let rows: Vec<TransactionRow> = items.iter().map(TransactionRow::from).collect();
            Table::new(rows).with(Style::sharp()).to_string()
        }
    }
}
