use steady_domain::UnlockFlow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UnlockModalProps {
    pub flow: UnlockFlow,
    pub on_acknowledge: Callback<()>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Two-step emergency unlock confirmation
#[function_component(UnlockModal)]
pub fn unlock_modal(props: &UnlockModalProps) -> Html {
    if !props.flow.is_open() {
        return html! {};
    }

    let cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let acknowledge = props.on_acknowledge.reform(|_: MouseEvent| ());
    let confirm = props.on_confirm.reform(|_: MouseEvent| ());

    let body = match props.flow {
        UnlockFlow::FirstWarning => html! {
            <>
                <h3 class="text-lg font-bold text-gray-900 mb-2">{"Wait! Check the impact."}</h3>
                <p class="text-gray-600 text-sm mb-6 leading-relaxed">
                    {"Unlocking the Shadow Wallet breaks your protection rules. You might miss your "}
                    <span class="font-bold text-gray-800">{"Rent (₹6000)"}</span>
                    {" and "}
                    <span class="font-bold text-gray-800">{"Bike EMI (₹2200)"}</span>
                    {" payments due next week."}
                </p>
                <div class="flex flex-col gap-3">
                    <button onclick={acknowledge} class="w-full py-3 bg-red-600 hover:bg-red-700 text-white font-semibold rounded-xl transition">
                        {"I Understand, Proceed"}
                    </button>
                    <button onclick={cancel.clone()} class="w-full py-3 bg-gray-100 hover:bg-gray-200 text-gray-700 font-semibold rounded-xl transition">
                        {"Cancel"}
                    </button>
                </div>
            </>
        },
        UnlockFlow::FinalWarning => html! {
            <>
                <h3 class="text-lg font-bold text-red-600 mb-2">{"FINAL WARNING"}</h3>
                <p class="text-gray-600 text-sm mb-6 leading-relaxed">
                    {"This action will be recorded in your monthly report. Your funds will be fully exposed to daily spending logic."}
                    <br/><br/>
                    <span class="font-bold">{"Are you absolutely sure?"}</span>
                </p>
                <div class="flex flex-col gap-3">
                    <button onclick={confirm} class="w-full py-3 bg-red-600 hover:bg-red-700 text-white font-bold rounded-xl transition shadow-lg shadow-red-200">
                        {"CONFIRM UNLOCK"}
                    </button>
                    <button onclick={cancel.clone()} class="w-full py-3 bg-gray-100 hover:bg-gray-200 text-gray-700 font-semibold rounded-xl transition">
                        {"Keep Locked"}
                    </button>
                </div>
            </>
        },
        UnlockFlow::Idle => html! {},
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm">
            <div class="bg-white rounded-2xl p-6 max-w-sm w-full shadow-2xl">
                <div class="flex justify-between items-start mb-4">
                    <div class="p-3 bg-red-100 rounded-full text-red-600 text-xl">{"⚠️"}</div>
                    <button onclick={cancel} class="text-gray-400 hover:text-gray-600">{"✕"}</button>
                </div>
                {body}
            </div>
        </div>
    }
}
