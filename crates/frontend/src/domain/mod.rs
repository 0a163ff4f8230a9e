pub mod departments;
pub mod manuals;
pub mod members;
pub mod quizzes;
pub mod roles;
