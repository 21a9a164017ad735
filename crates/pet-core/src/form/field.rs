use serde::{Deserialize, Serialize};
use std::fmt;

/// Campos del asistente. Los nombres serializados coinciden con las claves
/// usadas por los formularios web (`adoptionReason`, `petName`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    AdoptionReason,
    HomeEnvironment,
    PetName,
    PetBreed,
    SpecialNotes,
    AppointmentDate,
    AppointmentTime,
}

impl FormField {
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::AdoptionReason => "adoptionReason",
            FormField::HomeEnvironment => "homeEnvironment",
            FormField::PetName => "petName",
            FormField::PetBreed => "petBreed",
            FormField::SpecialNotes => "specialNotes",
            FormField::AppointmentDate => "appointmentDate",
            FormField::AppointmentTime => "appointmentTime",
        }
    }

    /// false para fecha y franja, que se fijan desde el calendario.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::AppointmentDate | FormField::AppointmentTime)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
