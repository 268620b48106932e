//! Store call descriptors, used by adapters that decorate a store.

use shared_types::ContactId;

/// Kind of store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// A single store call with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    List { query: Option<String> },
    Get { id: ContactId },
    Create,
    Update { id: ContactId },
    Delete { id: ContactId },
}

impl StoreOp {
    #[must_use]
    pub fn kind(&self) -> OpKind {
        match self {
            Self::List { .. } => OpKind::List,
            Self::Get { .. } => OpKind::Get,
            Self::Create => OpKind::Create,
            Self::Update { .. } => OpKind::Update,
            Self::Delete { .. } => OpKind::Delete,
        }
    }

    /// Writes change what subsequent reads return.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Create | Self::Update { .. } | Self::Delete { .. })
    }

    /// Cache key for reads; `None` for writes.
    #[must_use]
    pub fn read_key(&self) -> Option<String> {
        match self {
            Self::List { query } => Some(format!("list:{}", query.as_deref().unwrap_or(""))),
            Self::Get { id } => Some(format!("contact:{id}")),
            _ => None,
        }
    }
}
