pub mod aski;
pub mod health;
pub mod monev;
