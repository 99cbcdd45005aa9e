use shared::Theme;
use steady_domain::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub current: Route,
    pub theme: &'static Theme,
    pub on_navigate: Callback<Route>,
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    route: Route,
    label: &'static str,
    active: bool,
    theme: &'static Theme,
    on_click: Callback<Route>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let onclick = {
        let route = props.route;
        let on_click = props.on_click.clone();
        Callback::from(move |_| on_click.emit(route))
    };
    let state_class = if props.active {
        props.theme.nav_active
    } else {
        props.theme.nav_inactive
    };

    html! {
        <button
            {onclick}
            class={classes!("flex", "flex-col", "md:flex-row", "items-center", "md:gap-3", "p-2", "md:px-4", "md:py-3", "rounded-xl", "transition-all", "w-full", state_class)}
        >
            <span class="text-xl">{props.route.icon()}</span>
            <span class="text-[10px] md:text-sm font-medium mt-1 md:mt-0">{props.label}</span>
        </button>
    }
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let drawer_open = use_state(|| false);
    let theme = props.theme;

    // Navigating from the drawer also closes it
    let go = {
        let on_navigate = props.on_navigate.clone();
        let drawer_open = drawer_open.clone();
        Callback::from(move |route: Route| {
            drawer_open.set(false);
            on_navigate.emit(route);
        })
    };

    let item = |route: Route, label: &'static str| {
        html! {
            <NavItem
                {route}
                {label}
                active={props.current == route}
                {theme}
                on_click={go.clone()}
            />
        }
    };

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(true))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };
    let open_chat = {
        let go = go.clone();
        Callback::from(move |_| go.emit(Route::Chat))
    };

    html! {
        <>
            // Mobile bottom bar
            <div class="md:hidden fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-2 px-4 flex justify-between items-center z-50">
                {item(Route::Dashboard, Route::Dashboard.short_label())}
                {item(Route::Gigs, Route::Gigs.short_label())}
                <div class="relative -top-6">
                    <button
                        onclick={open_chat}
                        class={classes!(theme.primary_button, "p-4", "rounded-full", "shadow-lg", "border-4", "border-white", "transition-all")}
                    >
                        {"💬"}
                    </button>
                </div>
                {item(Route::ShadowWallet, Route::ShadowWallet.short_label())}
                <button onclick={open_drawer} class={classes!("flex", "flex-col", "items-center", "p-2", theme.nav_inactive)}>
                    <span class="text-xl">{"☰"}</span>
                    <span class="text-[10px] font-medium mt-1">{"More"}</span>
                </button>
            </div>

            if *drawer_open {
                <div class="fixed inset-0 z-[60] bg-black/50 md:hidden" onclick={close_drawer.clone()}>
                    <div
                        class={classes!("absolute", "right-0", "top-0", "bottom-0", "w-64", "p-6", "shadow-2xl", "space-y-2", theme.bg_panel)}
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    >
                        <div class="flex justify-between items-center mb-6">
                            <h2 class={classes!("font-bold", "text-lg", theme.text_primary)}>{"Menu"}</h2>
                            <button onclick={close_drawer} class={theme.text_secondary}>{"✕"}</button>
                        </div>
                        {for Route::drawer_routes().into_iter().map(|route| item(route, route.short_label()))}
                    </div>
                </div>
            }

            // Desktop sidebar
            <div class="hidden md:flex flex-col w-64 h-screen bg-white border-r border-gray-200 fixed left-0 top-0 p-4">
                <div class="mb-8 px-4">
                    <h1 class="text-2xl font-bold uppercase tracking-tight" style={format!("color: {}", theme.accent_color)}>
                        {"THESTEADY"}
                    </h1>
                </div>
                <nav class="space-y-2">
                    {for Route::ALL.into_iter().map(|route| item(route, route.label()))}
                </nav>
            </div>
        </>
    }
}
