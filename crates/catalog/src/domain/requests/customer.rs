use crate::{
    domain::requests::lenient::{Checks, Patch, Presence},
    model::status::RecordStatus,
};
use serde::Deserialize;
use shared::errors::ServiceError;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Maria Souza")]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "maria@example.com")]
    pub email: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "+55 11 98765-4321")]
    pub phone: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub notes: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<RecordStatus>)]
    pub status: Patch<RecordStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[serde(skip)]
    pub id: Option<Uuid>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub notes: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<RecordStatus>)]
    pub status: Patch<RecordStatus>,
}

fn check_contact(
    checks: &mut Checks,
    email: &Patch<String>,
    phone: &Patch<String>,
    notes: &Patch<String>,
) {
    checks.email("email", email, Presence::Nullable);
    checks.text("phone", phone, Presence::Nullable, 0, 40);
    checks.text("notes", notes, Presence::Nullable, 0, 2000);
}

impl Validate for CreateCustomerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::default();
        checks.text("name", &self.name, Presence::Required, 2, 120);
        check_contact(&mut checks, &self.email, &self.phone, &self.notes);
        checks.present("status", &self.status, Presence::Optional);
        checks.finish()
    }
}

impl Validate for UpdateCustomerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::default();
        checks.text("name", &self.name, Presence::Optional, 2, 120);
        check_contact(&mut checks, &self.email, &self.phone, &self.notes);
        checks.present("status", &self.status, Presence::Optional);
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: RecordStatus,
}

impl TryFrom<&CreateCustomerRequest> for NewCustomer {
    type Error = ServiceError;

    fn try_from(req: &CreateCustomerRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(NewCustomer {
            id: Uuid::new_v4(),
            name: req.name.value().cloned().unwrap_or_default(),
            email: req.email.non_blank().cloned(),
            phone: req.phone.non_blank().cloned(),
            notes: req.notes.non_blank().cloned(),
            status: req.status.value().copied().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub status: Option<RecordStatus>,
}

impl TryFrom<&UpdateCustomerRequest> for CustomerChanges {
    type Error = ServiceError;

    fn try_from(req: &UpdateCustomerRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(CustomerChanges {
            name: req.name.value().cloned(),
            email: req.email.to_text_change(),
            phone: req.phone.to_text_change(),
            notes: req.notes.to_text_change(),
            status: req.status.value().copied(),
        })
    }
}
