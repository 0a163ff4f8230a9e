pub mod common;
pub mod department;
pub mod manual;
pub mod member;
pub mod quiz;
pub mod role;
