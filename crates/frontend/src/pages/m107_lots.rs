use chrono::NaiveDate;
use contracts::domain::lots::{LotRow, LotStatus};
use leptos::prelude::*;
use uuid::Uuid;

use crate::pages::frame::PageFrame;

fn seed_rows() -> Vec<LotRow> {
    vec![
        LotRow {
            id: Uuid::new_v4(),
            lot_no: "M107-0042".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap_or_default(),
            shells_total: 250,
            status: LotStatus::Open,
        },
    ]
}

#[component]
pub fn M107LotsPage() -> impl IntoView {
    let rows = seed_rows();

    view! {
        <PageFrame title="M107">
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
