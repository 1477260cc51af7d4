use std::sync::Mutex;

use medconnect_storage::store::BoxFuture;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::navigation::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DialogIcon {
    Success,
    Error,
}

/// A modal acknowledgment: icon, title, body and a single confirm button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dialog {
    pub icon: DialogIcon,
    pub title: String,
    pub text: String,
    pub confirm_label: String,
}

impl Dialog {
    pub fn success(title: &str, text: impl Into<String>) -> Self {
        Self {
            icon: DialogIcon::Success,
            title: title.to_string(),
            text: text.into(),
            confirm_label: "OK".to_string(),
        }
    }

    pub fn error(title: &str, text: impl Into<String>) -> Self {
        Self {
            icon: DialogIcon::Error,
            title: title.to_string(),
            text: text.into(),
            confirm_label: "OK".to_string(),
        }
    }

    pub fn confirm_label(mut self, label: &str) -> Self {
        self.confirm_label = label.to_string();
        self
    }
}

/// Blocking-style modal surface. The returned future resolves once the
/// user confirms, so callers continue after acknowledgment.
pub trait DialogSurface: Send + Sync {
    fn show(&self, dialog: Dialog) -> BoxFuture<'_, ()>;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);

    /// Reload the current page, dropping all screen state.
    fn reload(&self);
}

/// Something a screen asked its surface to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Effect {
    Dialog(Dialog),
    Navigate { href: String },
    Reload,
}

/// A surface that confirms every dialog immediately and records what was
/// shown and where the screen navigated, in order.
///
/// Hosts that cannot block on the user (the HTTP host) hand the log back to
/// the browser to replay.
#[derive(Debug, Default)]
pub struct EffectLog {
    effects: Mutex<Vec<Effect>>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, effect: Effect) {
        self.effects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(effect);
    }

    pub fn snapshot(&self) -> Vec<Effect> {
        self.effects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DialogSurface for EffectLog {
    fn show(&self, dialog: Dialog) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            tracing::debug!(title = %dialog.title, "dialog shown");
            self.push(Effect::Dialog(dialog));
        })
    }
}

impl Navigator for EffectLog {
    fn navigate(&self, page: Page) {
        self.push(Effect::Navigate { href: page.href() });
    }

    fn reload(&self) {
        self.push(Effect::Reload);
    }
}
