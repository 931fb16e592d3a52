pub mod file_list;
pub mod file_node;
pub mod inclusion;

pub use crate::domain::DomainError;
pub use file_list::OrderedFileList;
pub use file_node::FileNode;
pub use inclusion::InclusionRecord;
