//! Repository implementations
//!
//! YAML-backed stores for the two human-edited files of a group folder.

pub mod group;
pub mod syllabus;

pub use group::YamlGroupRepository;
pub use syllabus::YamlSyllabusRepository;
