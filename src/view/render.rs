//! Plain-text rendering of the modal.

use super::{
    ModalBody, ModalView, OrderDetailsView, ACCEPT_LABEL, ACCEPT_NOTICE, HEADLINE, REJECT_LABEL,
    SUBHEADLINE,
};
use crate::domain::order::{OrderAction, OrderStatus};
use std::fmt;

const WIDTH: usize = 56;

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(WIDTH))
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    let pad = WIDTH.saturating_sub(label.chars().count() + value.chars().count());
    writeln!(f, "{}{}{}", label, " ".repeat(pad.max(1)), value)
}

fn controls(f: &mut fmt::Formatter<'_>, status: OrderStatus, enabled: bool) -> fmt::Result {
    match status {
        OrderStatus::Accepted => writeln!(f, "Sale accepted."),
        OrderStatus::Rejected => writeln!(f, "Sale rejected."),
        OrderStatus::Submitting(OrderAction::Accept) => writeln!(f, "Accepting sale..."),
        OrderStatus::Submitting(OrderAction::Reject) => writeln!(f, "Rejecting sale..."),
        OrderStatus::Pending if enabled => {
            writeln!(f, "[ {} ]   [ {} ]", ACCEPT_LABEL, REJECT_LABEL)
        }
        OrderStatus::Pending => Ok(()),
    }
}

fn details(f: &mut fmt::Formatter<'_>, view: &OrderDetailsView) -> fmt::Result {
    writeln!(f, "{}", HEADLINE)?;
    writeln!(f, "{}", SUBHEADLINE)?;
    writeln!(f, "{}", ACCEPT_NOTICE)?;
    rule(f)?;
    writeln!(f, "{}", view.title)?;
    writeln!(f, "{}", view.subtitle)?;
    writeln!(f, "{}", view.condition)?;
    match &view.image_uri {
        Some(uri) => writeln!(f, "Image: {}", uri)?,
        None => writeln!(f, "Image: (none)")?,
    }
    rule(f)?;
    for line in &view.lines {
        row(f, &line.label, &line.value)?;
    }
    rule(f)?;
    row(f, &view.earnings.label, &view.earnings.value)?;
    rule(f)
}

impl fmt::Display for ModalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.action_error {
            writeln!(f, "! Could not update order: {}", error)?;
        }

        match &self.body {
            ModalBody::Empty => writeln!(f, "No order selected."),
            ModalBody::Loading => match self.order_id {
                Some(id) => writeln!(f, "Loading order {}...", id),
                None => writeln!(f, "Loading order..."),
            },
            ModalBody::Failed { message } => {
                writeln!(f, "Could not load order: {}", message)
            }
            ModalBody::Loaded {
                details: view,
                controls_enabled,
            } => {
                details(f, view)?;
                controls(f, self.status, *controls_enabled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::DetailLine;

    fn loaded(status: OrderStatus, action_error: Option<&str>) -> ModalView {
        ModalView {
            order_id: None,
            status,
            body: ModalBody::Loaded {
                details: OrderDetailsView {
                    title: "Rolex Submariner Date".into(),
                    subtitle: "126610LN".into(),
                    condition: "Unworn / 2021".into(),
                    image_uri: None,
                    commission_percent: "2.50%".into(),
                    lines: vec![DetailLine {
                        label: "Selling Price".into(),
                        value: "$5,000.00".into(),
                    }],
                    earnings: DetailLine {
                        label: "Earnings".into(),
                        value: "$4,860.00".into(),
                    },
                },
                controls_enabled: status.accepts_actions(),
            },
            action_error: action_error.map(str::to_string),
        }
    }

    #[test]
    fn test_loaded_render_has_details_and_buttons() {
        let text = loaded(OrderStatus::Pending, None).to_string();
        assert!(text.contains("Your Watch Sold!"));
        assert!(text.contains("Rolex Submariner Date"));
        assert!(text.contains("Unworn / 2021"));
        assert!(text.contains("Image: (none)"));
        assert!(text.contains("$5,000.00"));
        assert!(text.contains("[ Accept Sale ]"));
        assert!(!text.contains("Could not update"));
    }

    #[test]
    fn test_rows_are_right_aligned() {
        let text = loaded(OrderStatus::Pending, None).to_string();
        let line = text
            .lines()
            .find(|l| l.starts_with("Selling Price"))
            .unwrap();
        assert_eq!(line.chars().count(), WIDTH);
        assert!(line.ends_with("$5,000.00"));
    }

    #[test]
    fn test_terminal_render_replaces_buttons() {
        let text = loaded(OrderStatus::Accepted, None).to_string();
        assert!(text.contains("Sale accepted."));
        assert!(!text.contains("Accept Sale"));
    }

    #[test]
    fn test_action_error_banner_is_rendered_above_details() {
        let text = loaded(OrderStatus::Pending, Some("Timeout")).to_string();
        assert!(text.starts_with("! Could not update order: Timeout"));
        assert!(text.contains("Rolex Submariner Date"));
    }

    #[test]
    fn test_failed_render_has_no_buttons() {
        let view = ModalView {
            order_id: None,
            status: OrderStatus::Pending,
            body: ModalBody::Failed {
                message: "Not found: order 9".into(),
            },
            action_error: Some("Timeout".into()),
        };
        let text = view.to_string();
        assert!(text.contains("Could not load order: Not found: order 9"));
        assert!(!text.contains("Accept Sale"));
        assert!(!text.contains("Reject Sale"));
    }
}
