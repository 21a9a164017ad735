use indexmap::IndexMap;
use serde::Serialize;

use super::FormRecord;

/// Instantánea de sólo lectura del formulario: etiqueta -> valor, en el
/// orden en que se muestra en el step Review.
pub type ReviewSnapshot = IndexMap<&'static str, String>;

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Arma la instantánea de revisión para el elemento `target_name`.
pub fn review_snapshot(form: &FormRecord, target_name: &str) -> ReviewSnapshot {
    let mut out = ReviewSnapshot::new();
    match form {
        FormRecord::Adoption(f) => {
            out.insert("Applying to Adopt", target_name.to_string());
            out.insert("Name", f.contact.name.clone());
            out.insert("Email", f.contact.email.clone());
            out.insert("Phone", f.contact.phone.clone());
            out.insert("Reason for Adopting", or_placeholder(&f.adoption_reason, "N/A"));
            out.insert("Home Environment", or_placeholder(&f.home_environment, "N/A"));
        }
        FormRecord::Service(f) => {
            let appointment = match (f.schedule.date(), f.schedule.slot()) {
                (Some(d), Some(s)) => format!("{} ({})", d.format("%Y-%m-%d"), s),
                (Some(d), None) => d.format("%Y-%m-%d").to_string(),
                _ => String::new(),
            };
            out.insert("Service", target_name.to_string());
            out.insert("Appointment", appointment);
            out.insert("Your Name", f.contact.name.clone());
            out.insert("Contact", f.contact.email.clone());
            out.insert("Pet Name", f.pet_name.clone());
            out.insert("Pet Breed", f.pet_breed.clone());
            out.insert("Notes", or_placeholder(&f.special_notes, "None"));
        }
    }
    out
}

/// Mensaje mostrado al llegar a Confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationNotice {
    pub headline: String,
    pub message: String,
}

pub fn confirmation_notice(form: &FormRecord, target_name: &str) -> ConfirmationNotice {
    match form {
        FormRecord::Adoption(_) => ConfirmationNotice { headline: "Application Submitted!".into(),
                                                        message: format!("Thank you for your interest in adopting {target_name}. We have received your application and will contact you within 3-5 business days to discuss the next steps.") },
        FormRecord::Service(f) => {
            let date = f.schedule.date().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
            let slot = f.schedule.slot().map(|s| s.to_string()).unwrap_or_default();
            ConfirmationNotice { headline: "Booking Confirmed!".into(),
                                 message: format!("Your appointment for {target_name} on {date} ({slot}) is confirmed. We look forward to seeing you and {}!",
                                                  f.pet_name) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowKind;
    use crate::form::FormField;

    #[test]
    fn adoption_snapshot_uses_placeholders_for_empty_answers() {
        let mut form = FormRecord::empty(FlowKind::Adoption);
        form.set_text(FormField::Name, "Ana".into());
        let snap = review_snapshot(&form, "Buddy");
        let keys: Vec<&str> = snap.keys().copied().collect();
        assert_eq!(keys,
                   vec!["Applying to Adopt", "Name", "Email", "Phone", "Reason for Adopting", "Home Environment"]);
        assert_eq!(snap["Applying to Adopt"], "Buddy");
        assert_eq!(snap["Reason for Adopting"], "N/A");
    }

    #[test]
    fn service_snapshot_defaults_notes_to_none() {
        let form = FormRecord::empty(FlowKind::Service);
        let snap = review_snapshot(&form, "Dog Walking (30 min)");
        assert_eq!(snap["Notes"], "None");
        assert_eq!(snap["Appointment"], "");
        assert_eq!(snap.len(), 7);
    }
}
