use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::GigOrder;
use steady_domain::{random_order, ConnectOutcome, GigBoard};
use yew::prelude::*;

use crate::hooks::use_wallet::{WalletAction, WalletHandle};
use crate::services::date_utils::{current_time_label, now_millis};

pub enum GigAction {
    BeginConnect(usize),
    CompleteConnect(usize),
    AddOrder(GigOrder),
}

#[derive(Clone, PartialEq, Default)]
pub struct GigBoardStore {
    pub board: GigBoard,
}

impl Reducible for GigBoardStore {
    type Action = GigAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.board.clone();
        match action {
            GigAction::BeginConnect(index) => {
                if board.begin_connect(index) != ConnectOutcome::Started {
                    return self;
                }
            }
            GigAction::CompleteConnect(index) => {
                if !board.complete_connect(index) {
                    return self;
                }
            }
            GigAction::AddOrder(order) => {
                board.push_order(order);
            }
        }
        Rc::new(GigBoardStore { board })
    }
}

pub struct UseGigBoardResult {
    pub board: GigBoard,
    pub actions: UseGigBoardActions,
}

#[derive(Clone)]
pub struct UseGigBoardActions {
    pub connect: Callback<usize>,
    pub simulate_order: Callback<()>,
}

#[hook]
pub fn use_gig_board(wallet: &WalletHandle, connect_delay_ms: u32) -> UseGigBoardResult {
    let store = use_reducer(GigBoardStore::default);

    let connect = {
        let store = store.clone();
        Callback::from(move |index: usize| {
            if !store.board.can_connect(index) {
                return;
            }

            store.dispatch(GigAction::BeginConnect(index));
            let store = store.clone();
            Timeout::new(connect_delay_ms, move || {
                store.dispatch(GigAction::CompleteConnect(index));
            })
            .forget();
        })
    };

    let simulate_order = {
        let store = store.clone();
        let wallet = wallet.clone();
        Callback::from(move |_| {
            let order = random_order(&mut rand::thread_rng(), now_millis(), &current_time_label());
            wallet.dispatch(WalletAction::RecordIncome(order.amount));
            store.dispatch(GigAction::AddOrder(order));
        })
    };

    UseGigBoardResult {
        board: store.board.clone(),
        actions: UseGigBoardActions {
            connect,
            simulate_order,
        },
    }
}
