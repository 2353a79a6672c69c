pub mod companions;
pub mod health;
pub mod home;
