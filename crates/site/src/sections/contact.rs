use std::time::Duration;

use interaction_runtime::use_interaction_runtime;
use leptos::*;
use site_host::{DeliveryReceipt, DraftRequest, OutboundMessage};
use site_ui::{Icon, IconName, IconSize, SectionHeader};

/// How long a transient status line stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Drafting,
    Sent,
    DemoSent,
    Failed(String),
}

impl ContactStatus {
    /// User-visible status line, `None` while idle.
    pub(crate) fn text(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending…".to_string()),
            Self::Drafting => Some("Drafting a message for you…".to_string()),
            Self::Sent => Some("Message sent! I'll get back to you soon.".to_string()),
            Self::DemoSent => {
                Some("Demo mode: message accepted locally (no delivery endpoint configured).".to_string())
            }
            Self::Failed(reason) => Some(reason.clone()),
        }
    }

    /// Whether the status should clear itself after [`STATUS_TTL`].
    fn is_transient(&self) -> bool {
        matches!(self, Self::Sent | Self::DemoSent | Self::Failed(_))
    }
}

/// Validates the form fields into an outbound message.
pub(crate) fn validate_submission(
    name: &str,
    email: &str,
    message: &str,
) -> Result<OutboundMessage, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err("Please fill in your name, email, and message.");
    }
    if !email.contains('@') {
        return Err("That email address doesn't look right.");
    }
    Ok(OutboundMessage {
        from_name: name.to_string(),
        from_email: email.to_string(),
        body: message.to_string(),
    })
}

fn show_status(status: RwSignal<ContactStatus>, next: ContactStatus) {
    let transient = next.is_transient();
    let shown = next.clone();
    status.set(next);
    if transient {
        set_timeout(
            move || {
                // Only clear if nothing replaced this status in the meantime.
                if status.get_untracked() == shown {
                    status.set(ContactStatus::Idle);
                }
            },
            STATUS_TTL,
        );
    }
}

#[component]
pub(crate) fn Contact() -> impl IntoView {
    let runtime = use_interaction_runtime();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let interest = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let status = create_rw_signal(ContactStatus::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let outbound = match validate_submission(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        ) {
            Ok(outbound) => outbound,
            Err(reason) => {
                show_status(status, ContactStatus::Failed(reason.to_string()));
                return;
            }
        };

        status.set(ContactStatus::Sending);
        let services = runtime.host.get_value();
        spawn_local(async move {
            match services.delivery().deliver(&outbound).await {
                Ok(DeliveryReceipt::Sent) => show_status(status, ContactStatus::Sent),
                Ok(DeliveryReceipt::DemoAccepted) => show_status(status, ContactStatus::DemoSent),
                Err(err) => show_status(status, ContactStatus::Failed(err.to_string())),
            }
        });
    };

    let on_draft = move |_| {
        let request = DraftRequest {
            name: name.get_untracked().trim().to_string(),
            interest: interest.get_untracked().trim().to_string(),
        };
        if request.name.is_empty() || request.interest.is_empty() {
            show_status(
                status,
                ContactStatus::Failed("Add your name and what you're interested in first.".to_string()),
            );
            return;
        }

        status.set(ContactStatus::Drafting);
        let services = runtime.host.get_value();
        spawn_local(async move {
            match services.drafts().draft(&request).await {
                Ok(draft) => {
                    message.set(draft);
                    status.set(ContactStatus::Idle);
                }
                Err(err) => show_status(status, ContactStatus::Failed(err.to_string())),
            }
        });
    };

    view! {
        <div class="contact">
            <SectionHeader
                title="Let's"
                accent="Connect"
                lede="Interested in collaborating or just want to say hi? Feel free to reach out!"
            />
            <form class="contact-form" on:submit=on_submit>
                <label class="contact-field">
                    <span>"Your Name"</span>
                    <input
                        type="text"
                        placeholder="e.g., Jane Smith"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label class="contact-field">
                    <span>"Your Email"</span>
                    <input
                        type="email"
                        placeholder="e.g., jane@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label class="contact-field">
                    <span>"What are you interested in?"</span>
                    <div class="contact-draft-row">
                        <input
                            type="text"
                            placeholder="e.g., a web project"
                            prop:value=move || interest.get()
                            on:input=move |ev| interest.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="contact-draft-button"
                            on:click=on_draft
                            disabled=move || status.get() == ContactStatus::Drafting
                        >
                            <Icon name=IconName::Sparkles size=IconSize::Sm />
                            "Draft it for me"
                        </button>
                    </div>
                </label>
                <label class="contact-field">
                    <span>"Message"</span>
                    <textarea
                        placeholder="Tell me about your project or just say hi!"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                        required
                    ></textarea>
                </label>
                {move || {
                    status.get().text().map(|text| {
                        let failed = matches!(status.get(), ContactStatus::Failed(_));
                        view! {
                            <p class="contact-status" class:failed=move || failed role="status">
                                {text}
                            </p>
                        }
                    })
                }}
                <button
                    type="submit"
                    class="contact-submit"
                    disabled=move || status.get() == ContactStatus::Sending
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
