//! Outbound message bodies. Every message carries a plain-text and an HTML part.

use maud::{DOCTYPE, Markup, html};

use crate::domain::{ContactSubmission, NewsletterSubscription};
use crate::ports::OutboundEmail;

pub const CONFIRMATION_SUBJECT: &str = "Thanks for contacting Samuel Adomeh";
pub const NEWSLETTER_SUBJECT: &str = "Newsletter subscription confirmed";

pub fn operator_subject(inquiry: &str) -> String {
    format!("Contact form: {inquiry}")
}

fn wrap(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body style="font-family: Arial, sans-serif; color: #222; line-height: 1.5;" {
                (body)
                hr;
                p style="font-size: 12px; color: #777;" { "Samuel Adomeh | Senior DevOps Engineer" }
            }
        }
    }
    .into_string()
}

/// Notification to the site operator with the whole submission.
pub fn contact_received(from: &str, operator: &str, submission: &ContactSubmission) -> OutboundEmail {
    let text_body = format!(
        "{} with email {} said:\n\"{}\"\n\n{}",
        submission.name, submission.email, submission.inquiry, submission.message
    );

    let html_body = wrap(
        "New contact form submission",
        html! {
            h2 { "New contact form submission" }
            p {
                strong { (submission.name) }
                " with email "
                a href={ "mailto:" (submission.email) } { (submission.email) }
                " said:"
            }
            p { em { "\u{201c}" (submission.inquiry) "\u{201d}" } }
            @for paragraph in submission.message.split("\n\n") {
                p { (paragraph) }
            }
        },
    );

    OutboundEmail {
        from: from.to_string(),
        to: operator.to_string(),
        subject: operator_subject(&submission.inquiry),
        text_body,
        html_body,
    }
}

/// Acknowledgement to whoever filled in the form.
pub fn contact_confirmation(from: &str, submission: &ContactSubmission) -> OutboundEmail {
    let text_body = format!(
        "Hi {},\n\nThanks for getting in touch about \"{}\". Your message has been \
         received and you will get a reply as soon as possible.\n\nBest regards,\nSamuel Adomeh\n",
        submission.name, submission.inquiry
    );

    let html_body = wrap(
        CONFIRMATION_SUBJECT,
        html! {
            p { "Hi " (submission.name) "," }
            p {
                "Thanks for getting in touch about "
                strong { (submission.inquiry) }
                ". Your message has been received and you will get a reply as soon as possible."
            }
            p { "Best regards," br; "Samuel Adomeh" }
        },
    );

    OutboundEmail {
        from: from.to_string(),
        to: submission.email.clone(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        text_body,
        html_body,
    }
}

pub fn newsletter_confirmation(from: &str, subscription: &NewsletterSubscription) -> OutboundEmail {
    let text_body = format!(
        "Hi,\n\n{} is now subscribed to the Samuel Adomeh newsletter. You will receive \
         new articles on DevOps, cloud infrastructure and automation.\n\n\
         If this was not you, you can ignore this message.\n",
        subscription.email
    );

    let html_body = wrap(
        NEWSLETTER_SUBJECT,
        html! {
            p { "Hi," }
            p {
                strong { (subscription.email) }
                " is now subscribed to the Samuel Adomeh newsletter. You will receive new \
                 articles on DevOps, cloud infrastructure and automation."
            }
            p { small { "If this was not you, you can ignore this message." } }
        },
    );

    OutboundEmail {
        from: from.to_string(),
        to: subscription.email.clone(),
        subject: NEWSLETTER_SUBJECT.to_string(),
        text_body,
        html_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            id: 1,
            name: "Alice".into(),
            email: "a@x.io".into(),
            inquiry: "Hi".into(),
            message: "Hello <there>".into(),
            submitted_at: Utc::now(),
            is_read: false,
        }
    }

    #[test]
    fn operator_text_body_quotes_the_inquiry() {
        let email = contact_received("site@x.io", "owner@x.io", &submission());
        assert_eq!(email.subject, "Contact form: Hi");
        assert_eq!(email.to, "owner@x.io");
        assert_eq!(email.text_body, "Alice with email a@x.io said:\n\"Hi\"\n\nHello <there>");
    }

    #[test]
    fn html_bodies_escape_user_input() {
        let email = contact_received("site@x.io", "owner@x.io", &submission());
        assert!(email.html_body.contains("Hello &lt;there&gt;"));
        assert!(!email.html_body.contains("<there>"));
    }

    #[test]
    fn confirmation_goes_to_submitter() {
        let email = contact_confirmation("site@x.io", &submission());
        assert_eq!(email.to, "a@x.io");
        assert_eq!(email.subject, CONFIRMATION_SUBJECT);
        assert!(email.text_body.starts_with("Hi Alice,"));
    }
}
