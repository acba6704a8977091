use crate::core::services::ServiceList;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardHeaderProps {
    pub(crate) services: ServiceList,
}

#[function_component(DashboardHeader)]
pub(crate) fn dashboard_header(props: &DashboardHeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="logo">{"🐉 KaliDocker"}</div>
            <div class="status-list">
                {for props.services.entries().iter().map(|service| html! {
                    <span
                        key={service.name}
                        class={classes!("status", service.state.badge_class())}
                        title={service.state.as_str()}
                    >
                        <span class="status-dot"></span>
                        {service.name}
                    </span>
                })}
            </div>
        </header>
    }
}
