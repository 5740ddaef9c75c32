use crate::mail::constants::*;
use crate::models::formation;
use crate::models::message::{Notifications, OutboundMessage};
use crate::models::registration::Registration;

/// Addresses the composer needs besides the submission itself.
#[derive(Debug, Clone)]
pub struct Contacts {
    /// Authenticated mail account, used as the sender of both messages.
    pub account: String,
    /// Operator inbox receiving new registrations, also given to applicants.
    pub operator: String,
}

/// Builds the operator notice and the applicant confirmation.
pub fn compose(registration: &Registration, contacts: &Contacts) -> Notifications {
    let formation_label = formation::label(&registration.formation_code);

    Notifications {
        admin: admin_message(registration, formation_label, contacts),
        applicant: applicant_message(registration, formation_label, contacts),
    }
}

fn admin_message(r: &Registration, formation_label: &str, contacts: &Contacts) -> OutboundMessage {
    let rows: String = [
        ("NOM", &r.last_name),
        ("POST NOM", &r.middle_name),
        ("PRÉNOM", &r.first_name),
        ("LIEU DE NAISSANCE", &r.birth_place),
        ("DATE DE NAISSANCE", &r.birth_date),
        ("PROVINCE", &r.province),
    ]
    .into_iter()
    .map(|(name, value)| {
        format!("<tr><td><strong>{name}</strong></td><td>{}</td></tr>\n", escape(value))
    })
    .collect();
    let formation = escape(formation_label);
    let email = escape(&r.email);
    let phone = escape(&r.phone);

    let body = format!(
        "<h2>Nouvelle demande d'inscription reçue</h2>
<table border=\"1\" cellpadding=\"10\" style=\"border-collapse: collapse; font-family: Arial;\">
<tr style=\"background-color: #f0f0f0;\"><td><strong>Champ</strong></td><td><strong>Valeur</strong></td></tr>
{rows}<tr><td><strong>FORMATION CHOISIE</strong></td><td style=\"color: {BRAND_COLOR}; font-weight: bold;\">{formation}</td></tr>
<tr><td><strong>E-MAIL</strong></td><td><a href=\"mailto:{email}\">{email}</a></td></tr>
<tr><td><strong>TÉLÉPHONE</strong></td><td><a href=\"tel:{phone}\">{phone}</a></td></tr>
</table>
<p style=\"margin-top: 20px; color: #666;\"><em>Ce message a été envoyé automatiquement depuis le site {ORGANIZATION_NAME}.</em></p>
"
    );

    OutboundMessage {
        sender: contacts.account.clone(),
        recipient: contacts.operator.clone(),
        subject: format!("{ADMIN_SUBJECT_PREFIX} - {} {}", r.last_name, r.first_name),
        body_html: body,
    }
}

fn applicant_message(
    r: &Registration,
    formation_label: &str,
    contacts: &Contacts,
) -> OutboundMessage {
    let first = escape(&r.first_name);
    let middle = escape(&r.middle_name);
    let last = escape(&r.last_name);
    let formation = escape(formation_label);
    let email = escape(&r.email);
    let phone = escape(&r.phone);
    let province = escape(&r.province);
    let operator = escape(&contacts.operator);

    let body = format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">
<h2 style=\"color: {BRAND_COLOR};\">Bonjour {first} {last},</h2>
<p>Nous avons bien reçu votre demande d'inscription pour la formation :</p>
<div style=\"background-color: #f0f9ff; padding: 15px; border-left: 4px solid {ACCENT_COLOR}; margin: 20px 0;\"><strong>{formation}</strong></div>
<p>Nous allons étudier votre demande et vous contacterons très prochainement au numéro <strong>{phone}</strong> pour finaliser votre inscription.</p>
<h3 style=\"color: {BRAND_COLOR}; margin-top: 30px;\">Récapitulatif de vos informations :</h3>
<ul style=\"line-height: 1.8;\">
<li><strong>Nom complet :</strong> {last} {middle} {first}</li>
<li><strong>Email :</strong> {email}</li>
<li><strong>Téléphone :</strong> {phone}</li>
<li><strong>Province :</strong> {province}</li>
</ul>
<div style=\"margin-top: 30px; padding: 20px; background-color: #f8fafc; border-radius: 8px;\">
<p style=\"margin: 0;\"><strong>Besoin d'aide ?</strong></p>
<p style=\"margin: 5px 0 0 0;\">Contactez-nous par WhatsApp : {SUPPORT_WHATSAPP}</p>
<p style=\"margin: 5px 0 0 0;\">Email : {operator}</p>
</div>
<p style=\"margin-top: 30px; color: #666; font-size: 0.9em;\">Cordialement,<br><strong>L'équipe {ORGANIZATION_NAME}</strong><br><em>{ORGANIZATION_TAGLINE}</em></p>
</div>
"
    );

    OutboundMessage {
        sender: format!("\"{ORGANIZATION_NAME}\" <{}>", contacts.account),
        recipient: r.email.clone(),
        subject: APPLICANT_SUBJECT.to_string(),
        body_html: body,
    }
}

/// Escapes text for use in HTML element content and double-quoted attributes.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
