//! Dashboard page layout.

use super::header::DashboardHeader;
use super::stats_cards::DashboardStatsCards;
use super::tool_grid::ToolGrid;
use crate::core::services::ServiceList;
use crate::core::stats::{DashboardStats, copyright_line};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardPageProps {
    pub(crate) services: ServiceList,
    pub(crate) stats: DashboardStats,
    pub(crate) year: u32,
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page(props: &DashboardPageProps) -> Html {
    html! {
        <div class="container">
            <DashboardHeader services={props.services.clone()} />
            <main>
                <DashboardStatsCards stats={props.stats} />
                <ToolGrid />
            </main>
            <footer class="footer">{copyright_line(props.year)}</footer>
        </div>
    }
}
