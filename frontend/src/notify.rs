use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

pub enum NoticeAction {
    Push(NoticeLevel, String),
    Dismiss(u32),
}

/// Newest last. Older notices are dropped past `MAX_NOTICES`.
#[derive(Debug, Default, PartialEq)]
pub struct Notices {
    next_id: u32,
    pub items: Vec<Notice>,
}

const MAX_NOTICES: usize = 4;

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: NoticeAction) -> Rc<Self> {
        let mut items = self.items.clone();
        let mut next_id = self.next_id;
        match action {
            NoticeAction::Push(level, message) => {
                items.push(Notice {
                    id: next_id,
                    level,
                    message,
                });
                next_id = next_id.wrapping_add(1);
                if items.len() > MAX_NOTICES {
                    items.remove(0);
                }
            }
            NoticeAction::Dismiss(id) => items.retain(|notice| notice.id != id),
        }
        Rc::new(Notices { next_id, items })
    }
}

/// Cheap handle pages use to post notices.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<NoticeAction>,
}

impl Notifier {
    pub fn new(dispatch: Callback<NoticeAction>) -> Self {
        Self { dispatch }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.dispatch
            .emit(NoticeAction::Push(NoticeLevel::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.dispatch
            .emit(NoticeAction::Push(NoticeLevel::Error, message));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    html! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 w-80" aria-live="polite">
            { for props.notices.iter().map(|notice| {
                let class_name = match notice.level {
                    NoticeLevel::Success => "flex items-start justify-between gap-3 px-4 py-3 rounded-xl shadow-lg text-sm bg-green-50 text-green-700 border border-green-200",
                    NoticeLevel::Error => "flex items-start justify-between gap-3 px-4 py-3 rounded-xl shadow-lg text-sm bg-red-50 text-red-700 border border-red-200",
                };
                let id = notice.id;
                let on_dismiss = props.on_dismiss.clone();
                html! {
                    <div key={id} class={class_name} role="status">
                        <span>{ notice.message.clone() }</span>
                        <button class="font-bold opacity-60 hover:opacity-100" aria-label="Dismiss" onclick={Callback::from(move |_| on_dismiss.emit(id))}>{"×"}</button>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(state: Rc<Notices>, message: &str) -> Rc<Notices> {
        state.reduce(NoticeAction::Push(NoticeLevel::Error, message.to_string()))
    }

    #[test]
    fn push_and_dismiss() {
        let state = push(Rc::new(Notices::default()), "Budget error: boom");
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].message, "Budget error: boom");

        let id = state.items[0].id;
        let state = state.reduce(NoticeAction::Dismiss(id));
        assert!(state.items.is_empty());
    }

    #[test]
    fn oldest_notice_is_dropped_when_full() {
        let mut state = Rc::new(Notices::default());
        for i in 0..6 {
            state = push(state, &format!("n{}", i));
        }
        let messages: Vec<&str> = state.items.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["n2", "n3", "n4", "n5"]);
    }

    #[test]
    fn ids_are_unique() {
        let state = push(push(Rc::new(Notices::default()), "a"), "b");
        assert_ne!(state.items[0].id, state.items[1].id);
    }
}
