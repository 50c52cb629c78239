pub mod career;
pub mod competency;
pub mod cpd;
pub mod document;
pub mod profile;
pub mod recommendation;
pub mod reflection;
pub mod training;
pub mod voice;
