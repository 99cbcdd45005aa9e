use std::rc::Rc;

use shared::AppMode;
use steady_domain::{ChatConfig, ChatError, ChatService, ChatSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::date_utils::now_utc;
use crate::services::GeminiClient;

pub enum ChatAction {
    Sent(String),
    Finished(Result<String, ChatError>),
}

#[derive(Clone, PartialEq)]
pub struct ChatStore {
    pub session: ChatSession,
}

impl Reducible for ChatStore {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            ChatAction::Sent(text) => {
                session.push_user(&text, now_utc());
            }
            ChatAction::Finished(outcome) => session.finish(outcome, now_utc()),
        }
        Rc::new(ChatStore { session })
    }
}

pub struct UseChatResult {
    pub session: ChatSession,
    pub input: String,
    pub actions: UseChatActions,
}

#[derive(Clone)]
pub struct UseChatActions {
    pub on_input: Callback<String>,
    pub send: Callback<()>,
}

/// Conversation state for the coach view. Sends go through the Gemini
/// client; failures are logged and otherwise dropped.
#[hook]
pub fn use_chat(config: &ChatConfig, mode: AppMode) -> UseChatResult {
    let store = use_reducer(|| ChatStore {
        session: ChatSession::new(now_utc()),
    });
    let input = use_state(String::new);

    let on_input = {
        let input = input.clone();
        Callback::from(move |value: String| input.set(value))
    };

    let send = {
        let store = store.clone();
        let input = input.clone();
        let config = config.clone();
        Callback::from(move |_| {
            let text = (*input).clone();
            if !store.session.can_send(&text) {
                return;
            }

            store.dispatch(ChatAction::Sent(text.clone()));
            input.set(String::new());

            let store = store.clone();
            let service = ChatService::new(GeminiClient::new(config.clone()), &config);
            spawn_local(async move {
                let outcome = service.send_message(mode, &text).await;
                store.dispatch(ChatAction::Finished(outcome));
            });
        })
    };

    UseChatResult {
        session: store.session.clone(),
        input: (*input).clone(),
        actions: UseChatActions { on_input, send },
    }
}
