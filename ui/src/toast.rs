//! Transient notifications. A signal-backed list provided via context;
//! every failure a page handler catches lands here instead of being fatal.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

const MAX_TOASTS: usize = 4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl Toasts {
    /// Append a toast, dropping the oldest past the cap.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// The shared toast list.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Provides the toast context and renders the host overlay.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastHost {}
    }
}

/// Fixed-position list of current toasts; click to dismiss.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toast-host",
            for toast in toasts().items {
                button {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_and_keeps_newest() {
        let mut toasts = Toasts::default();
        for i in 0..6 {
            toasts.push(ToastLevel::Success, format!("toast {i}"));
        }
        assert_eq!(toasts.items.len(), MAX_TOASTS);
        assert_eq!(toasts.items.last().unwrap().message, "toast 5");
        assert_eq!(toasts.items.first().unwrap().message, "toast 2");
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut toasts = Toasts::default();
        toasts.push(ToastLevel::Error, "a");
        toasts.push(ToastLevel::Error, "b");
        let id = toasts.items[0].id;
        toasts.dismiss(id);
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].message, "b");
    }
}
