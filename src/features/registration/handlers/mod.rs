mod registration_handler;

pub use registration_handler::{
    __path_list_registrations, __path_submit_registration, list_registrations,
    submit_registration,
};
