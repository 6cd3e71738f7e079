use contracts::live::{LiveMessage, ShellAnalyzed, Verdict};
use leptos::prelude::*;

use crate::pages::frame::PageFrame;
use crate::shared::live::LiveFeed;

#[component]
pub fn ShiftDetailsPage(shift_no: String) -> impl IntoView {
    let feed = leptos::context::use_context::<LiveFeed>().expect("LiveFeed context not found");

    let title = format!("Shift {}", shift_no);

    let shells = {
        let shift_no = shift_no.clone();
        Memo::new(move |_| {
            feed.events.with(|events| {
                events
                    .iter()
                    .filter_map(|msg| match msg {
                        LiveMessage::ShellAnalyzed(ev) if ev.shift_no == shift_no => {
                            Some(ev.clone())
                        }
                        _ => None,
                    })
                    .collect::<Vec<ShellAnalyzed>>()
            })
        })
    };

    view! {
        <PageFrame title=title>
            <p>
                {move || {
                    let total = shells.with(|s| s.len());
                    let approved = shells.with(|s| {
                        s.iter().filter(|e| e.verdict == Verdict::Approved).count()
                    });
                    format!(
                        "{} shells analyzed this session ({} approved, {} defect)",
                        total,
                        approved,
                        total - approved,
                    )
                }}
            </p>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SHELL ID"</th>
                        <th>"VERDICT"</th>
                        <th>"CAPTURED"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || shells.get()
                        key=|ev| ev.shell_id.clone()
                        children=|ev| {
                            view! {
                                <tr>
                                    <td>{ev.shell_id.clone()}</td>
                                    <td>
                                        {match ev.verdict {
                                            Verdict::Approved => "Approved",
                                            Verdict::Defect => "Defect",
                                        }}
                                    </td>
                                    <td>{ev.captured_at.format("%H:%M:%S").to_string()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </PageFrame>
    }
}
