//! Tenpista list rendering

use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{skeleton, ListState};
use crate::entities::Tenpista;

/// Placeholder rows shown while the first fetch runs
pub const SKELETON_ROWS: usize = 3;

pub const EMPTY_TITLE: &str = "No hay tenpistas";
pub const EMPTY_HINT: &str = "Comienza agregando un nuevo tenpista al sistema.";

#[derive(Tabled)]
struct TenpistaRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NOMBRE")]
    name: String,
    #[tabled(rename = "RUT")]
    rut: String,
}

impl From<&Tenpista> for TenpistaRow {
    fn from(tenpista: &Tenpista) -> Self {
        Self {
            id: tenpista.id,
            name: tenpista.name.clone(),
            rut: tenpista.rut.clone(),
        }
    }
}

/// Render the list for its current state; row order is the caller's
pub fn render(state: &ListState<Tenpista>) -> String {
    match state {
        ListState::Loading => skeleton(SKELETON_ROWS),
        ListState::Empty => format!(
            "{}\n{}",
            style(EMPTY_TITLE).bold(),
            style(EMPTY_HINT).dim()
        ),
        ListState::Ready(items) => {
            let rows: Vec<TenpistaRow> = items.iter().map(TenpistaRow::from).collect();
            Table::new(rows).with(Style::sharp()).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Tenpista> {
        vec![
            Tenpista {
                id: 1,
                name: "Tenpista 1".to_string(),
                rut: "11111111-1".to_string(),
            },
            Tenpista {
                id: 2,
                name: "Tenpista 2".to_string(),
                rut: "22222222-2".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_state_has_message_and_no_rows() {
        let output = render(&ListState::Empty);
        assert!(output.contains(EMPTY_TITLE));
        assert!(output.contains(EMPTY_HINT));
        assert!(!output.contains("RUT"));
    }

    #[test]
    fn test_ready_renders_rows_in_given_order() {
        let output = render(&ListState::Ready(items()));
        let first = output.find("Tenpista 1").unwrap();
        let second = output.find("Tenpista 2").unwrap();
        assert!(first < second);
        assert!(output.contains("11111111-1"));
        assert!(output.contains("22222222-2"));
    }

    #[test]
    fn test_loading_renders_fixed_skeleton() {
        let output = render(&ListState::Loading);
        assert_eq!(output.lines().count(), SKELETON_ROWS);
        assert!(!output.contains("Tenpista"));
    }
}
