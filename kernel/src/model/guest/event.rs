use derive_new::new;

use crate::model::guest::GuestType;

#[derive(Debug, Clone, new)]
pub struct CreateGuest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub ic_number: Option<String>,
    pub nationality: Option<String>,
    pub guest_type: GuestType,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGuest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub ic_number: Option<String>,
    pub nationality: Option<String>,
    pub is_active: Option<bool>,
}
