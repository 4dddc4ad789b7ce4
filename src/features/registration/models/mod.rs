mod registration_document;

pub use registration_document::RegistrationDocument;
