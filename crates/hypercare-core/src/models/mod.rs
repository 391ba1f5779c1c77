pub mod aski_state;
pub mod diagnosis;
pub mod monev;
pub mod phase;
