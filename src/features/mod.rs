pub mod login_form;
pub mod registration;
pub mod signup_form;
