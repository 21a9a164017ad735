use serde::{Deserialize, Serialize};

use super::FormField;
use crate::calendar::SlotSelection;
use crate::flow::FlowKind;

/// Datos de contacto comunes a ambos flujos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionForm {
    pub contact: ContactInfo,
    pub adoption_reason: String,
    pub home_environment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceForm {
    pub contact: ContactInfo,
    pub schedule: SlotSelection,
    pub pet_name: String,
    pub pet_breed: String,
    pub special_notes: String,
}

/// Registro del formulario según el flujo de la sesión.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flow", rename_all = "lowercase")]
pub enum FormRecord {
    Adoption(AdoptionForm),
    Service(ServiceForm),
}

impl FormRecord {
    /// Registro vacío para un flujo nuevo.
    pub fn empty(flow: FlowKind) -> Self {
        match flow {
            FlowKind::Adoption => FormRecord::Adoption(AdoptionForm::default()),
            FlowKind::Service => FormRecord::Service(ServiceForm::default()),
        }
    }

    pub fn flow(&self) -> FlowKind {
        match self {
            FormRecord::Adoption(_) => FlowKind::Adoption,
            FormRecord::Service(_) => FlowKind::Service,
        }
    }

    pub fn contact(&self) -> &ContactInfo {
        match self {
            FormRecord::Adoption(f) => &f.contact,
            FormRecord::Service(f) => &f.contact,
        }
    }

    pub fn schedule(&self) -> Option<&SlotSelection> {
        match self {
            FormRecord::Service(f) => Some(&f.schedule),
            FormRecord::Adoption(_) => None,
        }
    }

    pub(crate) fn schedule_mut(&mut self) -> Option<&mut SlotSelection> {
        match self {
            FormRecord::Service(f) => Some(&mut f.schedule),
            FormRecord::Adoption(_) => None,
        }
    }

    /// Valor de texto de un campo; `None` si el campo no pertenece al flujo
    /// o no es de texto.
    pub fn text(&self, field: FormField) -> Option<&str> {
        self.text_slot(field).map(String::as_str)
    }

    /// true si el campo tiene valor. Para fecha/franja mira la agenda.
    pub fn is_present(&self, field: FormField) -> bool {
        match field {
            FormField::AppointmentDate => self.schedule().and_then(|s| s.date()).is_some(),
            FormField::AppointmentTime => self.schedule().and_then(|s| s.slot()).is_some(),
            other => self.text(other).is_some_and(|v| !v.is_empty()),
        }
    }

    /// Escribe un campo de texto. Devuelve false si el campo no existe en este
    /// flujo.
    pub(crate) fn set_text(&mut self, field: FormField, value: String) -> bool {
        match self.text_slot_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn text_slot(&self, field: FormField) -> Option<&String> {
        let contact = self.contact();
        match (self, field) {
            (_, FormField::Name) => Some(&contact.name),
            (_, FormField::Email) => Some(&contact.email),
            (_, FormField::Phone) => Some(&contact.phone),
            (FormRecord::Adoption(f), FormField::AdoptionReason) => Some(&f.adoption_reason),
            (FormRecord::Adoption(f), FormField::HomeEnvironment) => Some(&f.home_environment),
            (FormRecord::Service(f), FormField::PetName) => Some(&f.pet_name),
            (FormRecord::Service(f), FormField::PetBreed) => Some(&f.pet_breed),
            (FormRecord::Service(f), FormField::SpecialNotes) => Some(&f.special_notes),
            _ => None,
        }
    }

    fn text_slot_mut(&mut self, field: FormField) -> Option<&mut String> {
        match (self, field) {
            (FormRecord::Adoption(AdoptionForm { contact, .. }) | FormRecord::Service(ServiceForm { contact, .. }),
             FormField::Name) => Some(&mut contact.name),
            (FormRecord::Adoption(AdoptionForm { contact, .. }) | FormRecord::Service(ServiceForm { contact, .. }),
             FormField::Email) => Some(&mut contact.email),
            (FormRecord::Adoption(AdoptionForm { contact, .. }) | FormRecord::Service(ServiceForm { contact, .. }),
             FormField::Phone) => Some(&mut contact.phone),
            (FormRecord::Adoption(f), FormField::AdoptionReason) => Some(&mut f.adoption_reason),
            (FormRecord::Adoption(f), FormField::HomeEnvironment) => Some(&mut f.home_environment),
            (FormRecord::Service(f), FormField::PetName) => Some(&mut f.pet_name),
            (FormRecord::Service(f), FormField::PetBreed) => Some(&mut f.pet_breed),
            (FormRecord::Service(f), FormField::SpecialNotes) => Some(&mut f.special_notes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_outside_the_flow_are_absent() {
        let mut adoption = FormRecord::empty(FlowKind::Adoption);
        assert!(adoption.set_text(FormField::AdoptionReason, "company".into()));
        assert!(!adoption.set_text(FormField::PetName, "Rex".into()));
        assert_eq!(adoption.text(FormField::PetName), None);
        assert!(adoption.schedule().is_none());
    }

    #[test]
    fn contact_is_shared_by_both_flows() {
        for flow in [FlowKind::Adoption, FlowKind::Service] {
            let mut rec = FormRecord::empty(flow);
            assert!(!rec.is_present(FormField::Email));
            rec.set_text(FormField::Email, "a@b.co".into());
            assert_eq!(rec.contact().email, "a@b.co");
            assert!(rec.is_present(FormField::Email));
        }
    }

    #[test]
    fn schedule_presence_tracks_date_and_slot() {
        let rec = FormRecord::empty(FlowKind::Service);
        assert!(!rec.is_present(FormField::AppointmentDate));
        assert!(!rec.is_present(FormField::AppointmentTime));
        assert_eq!(rec.text(FormField::AppointmentDate), None);
    }
}
