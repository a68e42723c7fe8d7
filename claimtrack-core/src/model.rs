use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionStorageKind {
    #[strum(serialize = "IN_MEMORY")]
    InMemory,
    #[strum(serialize = "FILE")]
    File,
}
