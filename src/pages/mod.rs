pub mod department;
pub mod home;
pub mod not_found;
