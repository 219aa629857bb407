// Interactive demo tools. Both are timed stubs with no backend.

pub mod contact;
pub mod simplifier;

pub use contact::{ContactDesk, ContactForm, Submission};
pub use simplifier::{Difficulty, SimplifiedOutput, StudySimplifier};
