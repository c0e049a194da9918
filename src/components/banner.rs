use yew::prelude::*;

pub const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerKind {
    Success,
    Error,
}

/// Outcome message raised by the form handlers and owned by `App`.
#[derive(Clone, PartialEq, Debug)]
pub struct BannerMessage {
    pub text: String,
    pub kind: BannerKind,
}

impl BannerMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub message: Option<BannerMessage>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let message = match &props.message {
        Some(message) => message,
        None => return html! {},
    };

    let (icon, color, heading) = match message.kind {
        BannerKind::Success => ("fas fa-check-circle", "#28a745", "Success!"),
        BannerKind::Error => ("fas fa-exclamation-triangle", "#dc3545", "Error"),
    };

    html! {
        <div id="success-message" class="status-banner show">
            <i class={icon} style={format!("color: {}", color)}></i>
            <h3>{heading}</h3>
            <p>{ &message.text }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_the_kind() {
        assert_eq!(BannerMessage::success("ok").kind, BannerKind::Success);
        assert_eq!(BannerMessage::error("no").kind, BannerKind::Error);
        assert_eq!(BannerMessage::error("no").text, "no");
    }
}
