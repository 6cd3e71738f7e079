//! Workspace page: attach a watch directory on the inspection service and
//! follow the shift table as analysis results stream in.

use chrono::NaiveDate;
use contracts::domain::shifts::{ShellTotals, ShiftRow};
use contracts::domain::workspace::{WatchAttachRequest, WorkspaceStatus};
use contracts::live::{LiveMessage, Verdict};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::pages::frame::PageFrame;
use crate::shared::api;
use crate::shared::live::LiveFeed;

fn seed_rows() -> Vec<ShiftRow> {
    vec![
        ShiftRow {
            sl_no: 1,
            shift_no: "S001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap_or_default(),
            total_analyze: 38,
            total_shells: ShellTotals {
                approved: 31,
                defect: 7,
            },
        },
        ShiftRow {
            sl_no: 2,
            shift_no: "S002".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap_or_default(),
            total_analyze: 0,
            total_shells: ShellTotals::default(),
        },
    ]
}

/// Folds one live event into the shift table.
///
/// Per-shell events increment the matching row, or open a new row when the
/// service reports a shift the table has not seen. Progress events are
/// authoritative totals and overwrite the counters of a known shift.
fn apply_live_message(rows: &mut Vec<ShiftRow>, msg: &LiveMessage) {
    match msg {
        LiveMessage::ShellAnalyzed(ev) => {
            let totals = match ev.verdict {
                Verdict::Approved => ShellTotals {
                    approved: 1,
                    defect: 0,
                },
                Verdict::Defect => ShellTotals {
                    approved: 0,
                    defect: 1,
                },
            };
            if let Some(row) = rows.iter_mut().find(|r| r.shift_no == ev.shift_no) {
                row.total_analyze += 1;
                row.total_shells.approved += totals.approved;
                row.total_shells.defect += totals.defect;
            } else {
                rows.push(ShiftRow {
                    sl_no: rows.len() as u32 + 1,
                    shift_no: ev.shift_no.clone(),
                    date: ev.captured_at.date_naive(),
                    total_analyze: 1,
                    total_shells: totals,
                });
            }
        }
        LiveMessage::ShiftProgress(progress) => {
            if let Some(row) = rows.iter_mut().find(|r| r.shift_no == progress.shift_no) {
                row.total_analyze = progress.total_analyze;
                row.total_shells = ShellTotals {
                    approved: progress.approved,
                    defect: progress.defect,
                };
            }
        }
    }
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let feed = leptos::context::use_context::<LiveFeed>().expect("LiveFeed context not found");

    let (shift_title, set_shift_title) = signal(String::new());
    let (directory, set_directory) = signal(String::new());
    let (status, set_status) = signal(Option::<WorkspaceStatus>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_busy, set_is_busy) = signal(false);

    // The table is derived state: the seed plus every event seen so far.
    let rows = Memo::new(move |_| {
        let mut rows = seed_rows();
        feed.events.with(|events| {
            for msg in events {
                apply_live_message(&mut rows, msg);
            }
        });
        rows
    });

    let attach = move |_| {
        let title_val = shift_title.get();
        let directory_val = directory.get();
        if title_val.trim().is_empty() || directory_val.trim().is_empty() {
            set_error_message.set(Some("Shift title and directory are required".to_string()));
            return;
        }

        set_is_busy.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let request = WatchAttachRequest {
                shift_title: title_val,
                watch_directory: directory_val.clone(),
            };
            match api::attach_watch(request).await {
                Ok(()) => {
                    set_status.set(Some(WorkspaceStatus {
                        path: directory_val,
                        is_active: true,
                    }));
                    feed.ensure_started();
                }
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_busy.set(false);
        });
    };

    let close_shift = move |_| {
        let Some(current) = status.get() else {
            return;
        };

        set_is_busy.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::detach_watch(&current.path).await {
                Ok(()) => set_status.set(Some(WorkspaceStatus {
                    is_active: false,
                    ..current
                })),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_busy.set(false);
        });
    };

    view! {
        <PageFrame title="Workspace">
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="workspace-attach">
                <input
                    type="text"
                    placeholder="Shift title"
                    value=move || shift_title.get()
                    on:input=move |ev| set_shift_title.set(event_target_value(&ev))
                    disabled=move || is_busy.get()
                />
                <input
                    type="text"
                    placeholder="Watch directory"
                    value=move || directory.get()
                    on:input=move |ev| set_directory.set(event_target_value(&ev))
                    disabled=move || is_busy.get()
                />
                <button class="btn-primary" on:click=attach disabled=move || is_busy.get()>
                    "Attach"
                </button>
            </div>

            <Show when=move || status.get().is_some()>
                <div class="workspace-status">
                    <span>
                        {move || {
                            status
                                .get()
                                .map(|s| {
                                    if s.is_active {
                                        format!("Watching {}", s.path)
                                    } else {
                                        format!("Detached from {}", s.path)
                                    }
                                })
                                .unwrap_or_default()
                        }}
                    </span>
                    <Show when=move || status.get().map(|s| s.is_active).unwrap_or(false)>
                        <button on:click=close_shift disabled=move || is_busy.get()>
                            "Close Shift"
                        </button>
                    </Show>
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SL.NO"</th>
                        <th>"SHIFT NO"</th>
                        <th>"DATE"</th>
                        <th>"TOTAL ANALYZE"</th>
                        <th>"APPROVED"</th>
                        <th>"DEFECTS"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.shift_no.clone()
                        children=move |row| {
                            let shift_path = format!("/workspace/{}", row.shift_no);
                            view! {
                                <tr>
                                    <td>{row.sl_no}</td>
                                    <td>{row.shift_no.clone()}</td>
                                    <td>{row.date.to_string()}</td>
                                    <td>{row.total_analyze}</td>
                                    <td>{row.total_shells.approved}</td>
                                    <td>{row.total_shells.defect}</td>
                                    <td>
                                        <button on:click=move |_| ctx.navigate(&shift_path)>
                                            "View"
                                        </button>
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
