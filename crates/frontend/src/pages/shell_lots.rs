use chrono::NaiveDate;
use contracts::domain::lots::{LotRow, LotStatus};
use leptos::prelude::*;
use uuid::Uuid;

use crate::pages::frame::PageFrame;

fn seed_rows() -> Vec<LotRow> {
    vec![
        LotRow {
            id: Uuid::new_v4(),
            lot_no: "SL-105-0017".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap_or_default(),
            shells_total: 480,
            status: LotStatus::Closed,
        },
        LotRow {
            id: Uuid::new_v4(),
            lot_no: "SL-105-0018".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap_or_default(),
            shells_total: 360,
            status: LotStatus::Open,
        },
    ]
}

#[component]
pub fn ShellLotsPage() -> impl IntoView {
    let rows = seed_rows();

    view! {
        <PageFrame title="Shell 105mm">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"LOT NO"</th>
                        <th>"DATE"</th>
                        <th>"SHELLS"</th>
                        <th>"STATUS"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.clone()
                        key=|row| row.id
                        children=|row| {
                            view! {
                                <tr>
                                    <td>{row.lot_no}</td>
                                    <td>{row.date.to_string()}</td>
                                    <td>{row.shells_total}</td>
                                    <td>
                                        {match row.status {
                                            LotStatus::Open => "Open",
                                            LotStatus::Closed => "Closed",
                                        }}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rows_have_unique_row_keys() {
        let rows = seed_rows();
        let mut ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rows.len(), "lot ids key the table rows");
    }
}
