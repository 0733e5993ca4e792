use crate::dashboards::d001_field_stats::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d001_field_stats::dto::{FieldStats, FieldStatsResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Width of a value-count bar, relative to the most frequent value
fn bar_width(count: u64, max: u64) -> String {
    if max == 0 {
        return "width: 0%".to_string();
    }
    format!("width: {:.0}%", count as f64 * 100.0 / max as f64)
}

/// Custom field statistics dashboard
#[component]
pub fn FieldStatsDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<FieldStatsResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_field_stats().await {
                Ok(response) => {
                    log::info!(
                        "Field stats loaded: {} field(s), {} people",
                        response.field_stats.len(),
                        response.total_people
                    );
                    set_data.set(Some(response));
                }
                Err(e) => {
                    log::error!("Failed to load field stats: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <PageFrame page_id="d001_field_stats--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{icon("dashboard")}"Dashboard"</h2>
                <button
                    class="btn btn-secondary"
                    disabled=move || loading.get()
                    on:click=move |_| load()
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error text-red-700">{e}</div> })}
                <Show when=move || loading.get()>
                    <div class="loading">"Loading..."</div>
                </Show>

                {move || data.get().map(|resp| {
                    let total = resp.total_people;
                    view! {
                        <div class="stat-card stat-card--total">
                            <span class="stat-card__label">"People"</span>
                            <span class="stat-card__value">{total}</span>
                        </div>
                        <div class="stats-grid">
                            {resp.field_stats.into_iter()
                                .map(|stats| view! { <FieldStatsCard stats=stats total_people=total /> })
                                .collect_view()}
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn FieldStatsCard(stats: FieldStats, total_people: u64) -> impl IntoView {
    let rate = format!("{:.0}% answered", stats.response_rate(total_people));
    let counts = stats.sorted_counts();
    let max = counts.first().map(|(_, c)| *c).unwrap_or(0);

    let numeric = stats.numeric_stats.map(|n| view! {
        <dl class="numeric-stats">
            <dt>"Min"</dt><dd>{format!("{:.2}", n.min)}</dd>
            <dt>"Max"</dt><dd>{format!("{:.2}", n.max)}</dd>
            <dt>"Avg"</dt><dd>{format!("{:.2}", n.avg)}</dd>
            <dt>"Count"</dt><dd>{n.count}</dd>
        </dl>
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{stats.field_label}</span>
                <span class="stat-card__type">{stats.field_type}</span>
            </div>
            <div class="stat-card__meta">
                {format!("{} responses", stats.total_responses)}" · "{rate}
            </div>
            <ul class="value-counts">
                {counts.into_iter().map(|(value, count)| view! {
                    <li>
                        <span class="value-counts__value">{value}</span>
                        <span class="value-counts__bar" style=bar_width(count, max)></span>
                        <span class="value-counts__count">{count}</span>
                    </li>
                }).collect_view()}
            </ul>
            {numeric}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(2, 4), "width: 50%");
        assert_eq!(bar_width(4, 4), "width: 100%");
        assert_eq!(bar_width(0, 0), "width: 0%");
    }
}
