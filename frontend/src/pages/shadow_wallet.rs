use steady_domain::mock_data::vault_buckets;
use steady_domain::{bucket_fill_width, bucket_percent, format_rupees, LockCommand, UnlockFlow};
use yew::prelude::*;

use crate::components::{Header, UnlockModal};
use crate::hooks::{use_config, use_wallet, WalletAction, WalletHandle};

fn apply_command(wallet: &WalletHandle, command: Option<LockCommand>) {
    match command {
        Some(LockCommand::Lock) => wallet.dispatch(WalletAction::Lock),
        Some(LockCommand::Unlock) => wallet.dispatch(WalletAction::Unlock),
        None => {}
    }
}

#[function_component(ShadowWallet)]
pub fn shadow_wallet() -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let flow = use_state(UnlockFlow::default);
    let snapshot = wallet.snapshot();
    let theme = wallet.theme();
    let money = |amount: f64| format_rupees(&config.currency_symbol, amount);

    let on_press = {
        let wallet = wallet.clone();
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let (next, command) = flow.press_button(wallet.wallet.is_unlocked());
            flow.set(next);
            apply_command(&wallet, command);
        })
    };
    let on_acknowledge = {
        let flow = flow.clone();
        Callback::from(move |_: ()| flow.set(flow.acknowledge()))
    };
    let on_confirm = {
        let wallet = wallet.clone();
        let flow = flow.clone();
        Callback::from(move |_: ()| {
            let (next, command) = flow.confirm();
            flow.set(next);
            apply_command(&wallet, command);
        })
    };
    let on_cancel = {
        let flow = flow.clone();
        Callback::from(move |_: ()| flow.set(flow.cancel()))
    };

    let unlocked = snapshot.is_unlocked;
    let ring = if unlocked { "#ef4444" } else { theme.accent_color };
    let locked_share = wallet.wallet.locked_share_percent();

    html! {
        <div class="space-y-6 pb-24 relative">
            <Header title="Shadow Vault" subtitle="Income Protection System" {theme} />

            <div class={classes!(
                "relative", "bg-gray-900", "text-white", "rounded-3xl", "p-8", "overflow-hidden", "shadow-2xl", "transition-all", "duration-500",
                unlocked.then_some("ring-4 ring-red-500/50")
            )}>
                <div
                    class="absolute top-0 right-0 w-64 h-64 rounded-full blur-[80px] opacity-20 -mr-16 -mt-16 animate-pulse"
                    style={format!("background-color: {}", theme.accent_color)}
                ></div>
                <div class="absolute bottom-0 left-0 w-40 h-40 bg-white rounded-full blur-[60px] opacity-10 -ml-10 -mb-10"></div>

                <div class="relative z-10 flex flex-col items-center">
                    <div
                        class="mb-6 p-4 rounded-full bg-gray-800 ring-4 transition-all duration-700 text-3xl"
                        style={format!("border-color: {ring}; box-shadow: 0 0 30px {ring}66")}
                    >
                        {if unlocked { "🔓" } else { "🔒" }}
                    </div>

                    <div class="text-center mb-2">
                        <p class="text-gray-400 text-xs font-medium uppercase tracking-widest mb-1">{"Total Protected"}</p>
                        <h2 class={classes!("text-4xl", "font-bold", "tracking-tight", "font-mono", if unlocked { "text-red-400" } else { "text-white" })}>
                            {money(snapshot.shadow_balance)}
                        </h2>
                    </div>

                    <p class={classes!(
                        "text-xs", "flex", "items-center", "gap-1", "px-3", "py-1", "rounded-full", "border", "transition-colors",
                        if unlocked { "bg-red-900/30 border-red-500/30 text-red-300" } else { "bg-gray-800 border-gray-700 text-gray-300" }
                    )}>
                        {if unlocked { "🛡️ SECURITY OFF" } else { "🛡️ Auto-Lock Active" }}
                    </p>
                </div>

                <div class="mt-8">
                    <div class="flex justify-between text-[10px] text-gray-400 mb-2 font-medium uppercase tracking-wider">
                        <span>{format!("Locked ({}%)", locked_share)}</span>
                        <span>{"Goal Progress"}</span>
                    </div>
                    <div class="h-3 bg-gray-800 rounded-full overflow-hidden flex relative">
                        <div
                            class="h-full transition-all duration-1000 ease-out relative"
                            style={format!("width: {}%; background-color: {}; box-shadow: 0 0 15px {}", locked_share, theme.accent_color, theme.accent_color)}
                        >
                            <div class="absolute right-0 top-0 bottom-0 w-0.5 bg-white/50"></div>
                        </div>
                    </div>
                </div>
            </div>

            <div class={classes!(
                "border", "shadow-sm", "rounded-2xl", "p-5", "flex", "justify-between", "items-center",
                if unlocked { classes!("border-red-200", "bg-red-50") } else { classes!(theme.bg_panel, theme.border) }
            )}>
                <div>
                    <p class={classes!("text-xs", "font-semibold", "uppercase", "tracking-wide", if unlocked { "text-red-500" } else { "text-gray-400" })}>
                        {if unlocked { "Total Exposed Balance" } else { "Safe to Spend" }}
                    </p>
                    <span class={classes!("text-3xl", "font-bold", if unlocked { "text-red-700" } else { theme.text_primary })}>
                        {money(snapshot.visible_balance)}
                    </span>
                </div>
                <div class={classes!(
                    "h-12", "w-12", "rounded-full", "flex", "items-center", "justify-center", "shadow-inner", "text-xl",
                    if unlocked { "bg-red-100 text-red-600" } else { theme.icon_bg }
                )}>
                    {"👁️"}
                </div>
            </div>

            <h3 class={classes!("font-bold", "pl-1", theme.text_primary)}>{"Vault Compartments"}</h3>
            <div class="grid grid-cols-2 gap-4">
                {for vault_buckets().into_iter().map(|bucket| html! {
                    <div key={bucket.label.clone()} class={classes!(
                        "p-4", "rounded-2xl", "border", "shadow-sm", "flex", "flex-col", "justify-between", "h-32", "relative", "overflow-hidden",
                        if unlocked { classes!("border-red-100", "opacity-70", "bg-white") } else { classes!(theme.bg_panel, theme.border) }
                    )}>
                        <div class="absolute -bottom-2 -right-2 text-6xl opacity-5 grayscale">{bucket.icon.clone()}</div>
                        <div class="flex items-center gap-2 mb-2 relative z-10">
                            <div class={classes!("w-2", "h-2", "rounded-full", bucket.color_class.clone())}></div>
                            <span class={classes!("font-semibold", "text-sm", theme.text_primary)}>{bucket.label.clone()}</span>
                        </div>
                        <div class="relative z-10">
                            <p class={classes!("text-xl", "font-bold", theme.text_primary)}>{money(bucket.amount)}</p>
                            <div class="w-full bg-gray-100 h-1.5 rounded-full mt-2 overflow-hidden">
                                <div
                                    class={classes!("h-full", "rounded-full", bucket.color_class.clone())}
                                    style={format!("width: {}%", bucket_fill_width(&bucket))}
                                ></div>
                            </div>
                            <div class="flex justify-between mt-1">
                                <p class="text-[10px] text-gray-400">{format!("Target: {}", bucket.target)}</p>
                                <p class="text-[10px] font-bold text-gray-500">{format!("{}%", bucket_percent(&bucket))}</p>
                            </div>
                        </div>
                    </div>
                })}
            </div>

            <div class="pt-4">
                <button
                    onclick={on_press}
                    class={classes!(
                        "w-full", "py-4", "rounded-xl", "border-2", "border-dashed", "font-bold", "flex", "items-center", "justify-center", "gap-2", "transition-all", "active:scale-95",
                        if unlocked { "bg-red-50 border-red-300 text-red-600 shadow-inner" } else { "bg-gray-50 border-gray-300 text-gray-400 hover:bg-white hover:border-gray-400" }
                    )}
                >
                    {if unlocked { "🔓 SECURITY OVERRIDDEN (TAP TO LOCK)" } else { "⚠️ EMERGENCY UNLOCK" }}
                </button>
                if unlocked {
                    <p class="text-center text-xs text-red-500 mt-2 font-medium animate-pulse">
                        {"Warning: Funds are now exposed to spending logic."}
                    </p>
                }
            </div>

            <UnlockModal flow={*flow} {on_acknowledge} {on_confirm} {on_cancel} />
        </div>
    }
}
