pub use super::consultation::Entity as Consultation;
