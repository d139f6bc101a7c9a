pub mod curl;
pub mod dig;
pub mod health;
pub mod helpers;
pub mod index;
pub mod layout;
