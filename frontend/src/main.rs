use std::rc::Rc;

use log::LevelFilter;
use steady_domain::{DashboardConfig, Route};
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::Navigation;
use hooks::{use_route, WalletHandle, WalletStore};
use pages::{Chat, Dashboard, Expenses, GigDashboard, Predictions, Savings, ShadowWallet, SmartModes};
use services::config::load_config;
use services::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<DashboardConfig>,
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    route: Route,
    on_navigate: Callback<Route>,
}

#[function_component(Content)]
fn content(props: &ContentProps) -> Html {
    match props.route {
        Route::Dashboard => html! { <Dashboard on_navigate={props.on_navigate.clone()} /> },
        Route::Gigs => html! { <GigDashboard /> },
        Route::ShadowWallet => html! { <ShadowWallet /> },
        Route::Modes => html! { <SmartModes /> },
        Route::Predictions => html! { <Predictions /> },
        Route::Savings => html! { <Savings /> },
        Route::Expenses => html! { <Expenses /> },
        Route::Chat => html! { <Chat /> },
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let wallet = use_reducer(WalletStore::default);
    let route = use_route();
    let theme = wallet.theme();

    html! {
        <ContextProvider<Rc<DashboardConfig>> context={props.config.clone()}>
            <ContextProvider<WalletHandle> context={wallet.clone()}>
                <div class={classes!("min-h-screen", "flex", "transition-colors", "duration-500", theme.bg_app)}>
                    <Navigation current={route.route} {theme} on_navigate={route.navigate.clone()} />
                    <main class="flex-1 md:ml-64 p-4 md:p-8 max-w-full overflow-hidden">
                        <div class="max-w-2xl mx-auto h-full">
                            <Content route={route.route} on_navigate={route.navigate.clone()} />
                        </div>
                    </main>
                </div>
            </ContextProvider<WalletHandle>>
        </ContextProvider<Rc<DashboardConfig>>>
    }
}

fn main() {
    let config = load_config();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_level_filter().ok())
        .unwrap_or(LevelFilter::Info);
    Logger::init(level);

    let config = config.unwrap_or_else(|e| {
        log::error!("{:#}, falling back to defaults", e);
        DashboardConfig::default()
    });
    log::info!("Starting dashboard with {} ms platform link delay", config.platform_connect_delay_ms);

    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
}
