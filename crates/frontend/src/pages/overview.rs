use contracts::live::LiveMessage;
use leptos::prelude::*;

use crate::pages::frame::PageFrame;
use crate::shared::live::{ChannelStatus, LiveFeed};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let feed = leptos::context::use_context::<LiveFeed>().expect("LiveFeed context not found");

    let analyzed_count = move || {
        feed.events.with(|events| {
            events
                .iter()
                .filter(|e| matches!(e, LiveMessage::ShellAnalyzed(_)))
                .count()
        })
    };

    view! {
        <PageFrame title="Overview">
            <div class="overview-cards">
                <div class="card">
                    <div class="card__label">"Live channel"</div>
                    <div class="card__value">
                        {move || match feed.status.get() {
                            ChannelStatus::Idle => "Not started",
                            ChannelStatus::Connected => "Connected",
                            ChannelStatus::Reconnecting => "Reconnecting",
                        }}
                    </div>
                </div>
                <div class="card">
                    <div class="card__label">"Shells analyzed this session"</div>
                    <div class="card__value">{analyzed_count}</div>
                </div>
            </div>
            <p>"Open the Workspace to attach a watch directory and start a shift."</p>
        </PageFrame>
    }
}
