use crate::core::stats::DashboardStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardStatsCardsProps {
    pub(crate) stats: DashboardStats,
}

#[function_component(DashboardStatsCards)]
pub(crate) fn dashboard_stats_cards(props: &DashboardStatsCardsProps) -> Html {
    html! {
        <div class="dashboard-grid">
            {for props.stats.cards().into_iter().map(|(label, value)| html! {
                <div class="card stat-card" key={label}>
                    <h3>{label}</h3>
                    <div class="stat-value">{value}</div>
                </div>
            })}
        </div>
    }
}
