#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual flavor of a toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    /// Red styling for failures surfaced to the user.
    Destructive,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id (used for later dismissal).
    pub fn push(&mut self, variant: ToastVariant, title: &str, message: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            title: title.to_owned(),
            message: message.to_owned(),
            variant,
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored, so a manual dismiss
    /// racing an auto-dismiss is harmless.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
