use leptos::prelude::*;
use server_fn::ServerFnError;
use voting_app::domain::Mutation;

use crate::api::error_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-line operator notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn from_outcome(outcome: &Result<Mutation, ServerFnError>) -> Self {
        match outcome {
            Ok(mutation) => Self::success(mutation.success_notice()),
            Err(e) => Self::error(error_text(e)),
        }
    }
}

#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let (icon, class) = match notice.kind {
                NoticeKind::Success => ("✓", "notice notice--success"),
                NoticeKind::Error => ("✕", "notice notice--error"),
            };

            view! {
                <div class=class role="status">
                    <span class="notice__icon">{icon}</span>
                    <span class="notice__text">{notice.text}</span>
                </div>
            }
        })
    }
}
